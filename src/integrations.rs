// External integrations module
// Everything that talks to a process or a server lives here

pub mod git;

// Gitea issue tracker
pub mod gitea;
