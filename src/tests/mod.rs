//! # Fixtures shared by tests that require a look inside the crate.
//!
//! Convention for function names:
//!
//! * `fn linear_program()`
//! * `fn tableau_form()`: the initial tableau
//! * `fn repaired_tableau_form()`: the tableau once the basis is feasible
//! * `fn optimal_tableau_form()`
