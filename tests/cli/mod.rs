mod bump;
mod listing;
mod load;
mod render;
mod settings;
