pub mod flag;
pub mod vuln;
