//! Grammar productions, split into expression and statement rules.

mod expr;
mod stmt;
