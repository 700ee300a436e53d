mod common;
mod appearance;
mod creator;
