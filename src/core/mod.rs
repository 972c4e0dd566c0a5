pub mod builder;
pub mod color;
pub mod coverage;
pub mod document;
pub mod error;
pub mod function;
pub mod geometry;
pub mod normalize;
pub mod page;
pub mod shading;
pub mod spread;
pub mod stop;
pub mod strategy;
pub mod template;
pub mod writer;
