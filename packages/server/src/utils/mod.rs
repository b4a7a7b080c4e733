pub mod meme_lines;
pub mod object_key;
