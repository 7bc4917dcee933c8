pub mod calculating;
pub mod intermission;
pub mod intro;
pub mod letter;
pub mod part1;
pub mod part2;
pub mod reveal;
