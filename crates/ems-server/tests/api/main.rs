mod access_gate;
mod base_path;
mod health_check;
mod helpers;
mod payroll;
