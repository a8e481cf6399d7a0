mod stories;

pub use stories::StoriesCommands;
