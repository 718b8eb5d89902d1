mod common;
mod experience;
