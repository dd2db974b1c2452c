mod fighter;
mod health;

pub use fighter::{
    create_fighter_handler, delete_fighter_handler, edit_fighter_handler, get_fighter_handler,
    list_fighters_handler,
};
pub use health::health_handler;
