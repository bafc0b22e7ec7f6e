pub mod entry;

#[cfg(test)]
mod tests;
