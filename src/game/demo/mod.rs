// Demo module for the game. Provides the terminal dev loop and its printing helpers.
pub mod game_loop;
pub mod render;
