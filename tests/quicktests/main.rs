//! Property tests against the public API of each container.

mod stack;
mod tree;
