pub mod shell;

pub use shell::InteractiveShell;
