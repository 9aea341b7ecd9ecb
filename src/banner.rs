//! Startup banner shown when a session opens and after `clear`.

pub const BANNER: &[&str] = &[
    "DEVOPS CRIME INVESTIGATION BUREAU",
    "Recruitment Screening Terminal v1.0",
    "",
    "Welcome, Candidate.",
    "",
    "DCIB systems cannot be accessed without proving technical competence.",
    "",
    "OBJECTIVE:",
    "Locate your Agent Credentials hidden within this system.",
    "",
    "Allowed commands:",
    "ls",
    "cd",
    "cat",
    "pwd",
    "clear",
    "",
    "Begin.",
];
