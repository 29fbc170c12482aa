mod scanner;

pub use scanner::ProjectScanner;
