//! Demo walkthrough
//!
//! Usage: dishmenu [demo] [--keep-data]
//!
//! Runs every operation once, in order, each in its own session.

use clap::Args;
use dishmenu_core::model::{DishId, NewDish, Price};
use dishmenu_store::Database;

use super::{CommandResult, ConnectionArgs};

const SOUP_FRAGMENT: &str = "Суп";
const FIRST_DISH_ID: DishId = 1;

#[derive(Debug, Default, Args)]
pub struct DemoArgs {
    /// Keep existing dishes instead of resetting the schema first
    #[arg(long)]
    pub keep_data: bool,
}

/// Execute the walkthrough
///
/// An unreachable database ends the run early with a message; that is not
/// treated as an error. With `--keep-data` the probe runs against the
/// existing database, so a missing database file ends the run there.
pub fn execute(connection: &ConnectionArgs, args: DemoArgs) -> CommandResult {
    let db = connection.open_database()?;

    if !args.keep_data {
        db.initialize_schema()?;
    }

    if db.can_connect() {
        println!("Database is reachable.");
    } else {
        println!("Could not connect to the database.");
        return Ok(());
    }

    if args.keep_data {
        db.ensure_created()?;
    }

    run_steps(&db)
}

fn run_steps(db: &Database) -> CommandResult {
    let tomato = NewDish::new("Суп томатный", "Гаспаччо", Price::from_minor(8500));
    db.with_session(|s| s.insert(&tomato))?;
    println!("Dish added.");

    let batch = [
        NewDish::new("Суп грибной", "Грибной суп с лисичками", Price::from_minor(5699)),
        NewDish::new("Борщ", "Традиционный украинский борщ", Price::from_minor(6455)),
    ];
    db.with_session(|s| s.insert_many(&batch))?;
    println!("Dish collection added.");

    let soups = db.with_session(|s| s.find_by_name_containing(SOUP_FRAGMENT))?;
    println!("Dishes with names containing '{}':", SOUP_FRAGMENT);
    for dish in &soups {
        println!("{}", dish);
    }

    match db.with_session(|s| s.find(FIRST_DISH_ID))? {
        Some(dish) => println!(
            "Dish with id = {}: {} - {} UAH",
            FIRST_DISH_ID,
            dish.display_name(),
            dish.price
        ),
        None => println!("Dish with id = {} not found.", FIRST_DISH_ID),
    }

    match db.with_session(|s| s.latest())? {
        Some(dish) => println!(
            "Most recently added dish: {} - {} UAH",
            dish.display_name(),
            dish.price
        ),
        None => println!("The dish table is empty."),
    }

    Ok(())
}
