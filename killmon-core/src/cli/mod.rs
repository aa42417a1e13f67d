pub mod conf;
#[cfg(unix)]
pub mod reload;
pub mod scan;

#[cfg(test)]
mod tests;
