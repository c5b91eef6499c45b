// Command handlers module
// One module per subcommand

pub mod init;
pub mod name;
pub mod run;
