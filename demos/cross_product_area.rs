//! Area spanned by two 3-D vectors, as a parallelogram and as a triangle.
//!
//! Run with `RUST_LOG=vecmath=debug` to see the library's tracing events.

use tracing_subscriber::EnvFilter;
use vecmath::{Area, Rounded, Vector};

fn main() -> vecmath::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let v = Vector::new([1.5, 9.547, 3.691])?;
    let w = Vector::new([-6.007, 0.124, 5.772])?;

    let cross = v.cross_product(&w)?;
    println!("v       = {}", v);
    println!("w       = {}", w);
    println!("v x w   = {}", Rounded::new(&cross, 6));
    println!("area    = {}", v.cp_area(&w, Area::Parallelogram)?);
    println!("triangle= {}", v.cp_area(&w, Area::Triangle)?);

    // Decomposition onto a zero vector has no unique answer.
    let zero = Vector::new([0.0, 0.0, 0.0])?;
    if let Err(e) = v.parallel_component(&zero) {
        println!("v onto 0: {} ({:?})", e, e.kind());
    }
    Ok(())
}
