use shadow_rs::shadow;

shadow!(build);

// Internals
// ---------
pub mod derank;
pub mod disjoint_set;
pub mod grid;
pub mod random;

// Mazes and problems
// ------------------
pub mod maze;
pub mod problem;
pub mod search;

// Algorithms
// ----------
pub mod algorithms;
pub mod generators;
