pub mod summarize;
pub mod vibe;

#[cfg(test)]
pub(crate) mod testing;
