// Printing to stdout would mix with generated grammars that the binary prints. Use `tracing` instead.
#![deny(clippy::print_stdout)]

pub mod assemble;
pub mod contribute;
pub mod grammar;
pub mod manifest;
pub mod spec;

#[cfg(test)]
mod tests;
