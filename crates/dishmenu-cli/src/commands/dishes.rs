//! Dish commands
//!
//! Usage: dishmenu add | import | search | get | latest | list | count

use clap::Args;
use dishmenu_core::model::{Dish, DishId, NewDish, Price};
use dishmenu_core::{DmError, DmErrorKind};
use std::path::PathBuf;

use super::{CommandResult, ConnectionArgs};

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Dish name
    #[arg(long)]
    pub name: Option<String>,

    /// Dish description
    #[arg(long)]
    pub description: Option<String>,

    /// Price with at most two fractional digits, e.g. 56.99
    #[arg(long)]
    pub price: Price,
}

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// JSON file with an array of {"name", "description", "price"} objects
    pub path: PathBuf,
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Text the dish name must contain (case-sensitive)
    pub text: String,
}

#[derive(Debug, Args)]
pub struct GetArgs {
    /// Dish id
    #[arg(allow_negative_numbers = true)]
    pub id: DishId,
}

fn print_dishes(dishes: &[Dish]) {
    for dish in dishes {
        println!("{}", dish);
    }
}

/// Insert one dish and print its id
pub fn execute_add(connection: &ConnectionArgs, args: AddArgs) -> CommandResult {
    let db = connection.open_database()?;
    let dish = NewDish {
        name: args.name,
        description: args.description,
        price: args.price,
    };

    let id = db.with_session(|s| s.insert(&dish))?;
    println!("Dish added with id {}.", id);
    Ok(())
}

/// Insert every dish from a JSON file in one transaction
pub fn execute_import(connection: &ConnectionArgs, args: ImportArgs) -> CommandResult {
    let text = std::fs::read_to_string(&args.path).map_err(|e| {
        DmError::new(DmErrorKind::Io)
            .with_op("import")
            .with_entity_id(args.path.display().to_string())
            .with_message(e.to_string())
    })?;
    let dishes = NewDish::list_from_json(&text).map_err(DmError::from)?;

    let db = connection.open_database()?;
    let ids = db.with_session(|s| s.insert_many(&dishes))?;
    println!("Imported {} dishes.", ids.len());
    Ok(())
}

pub fn execute_search(connection: &ConnectionArgs, args: SearchArgs) -> CommandResult {
    let db = connection.open_database()?;
    let dishes = db.with_session(|s| s.find_by_name_containing(&args.text))?;

    println!("Dishes with names containing '{}':", args.text);
    print_dishes(&dishes);
    Ok(())
}

pub fn execute_get(connection: &ConnectionArgs, args: GetArgs) -> CommandResult {
    let db = connection.open_database()?;
    match db.with_session(|s| s.find(args.id))? {
        Some(dish) => println!("{}", dish),
        None => println!("Dish with id {} not found.", args.id),
    }
    Ok(())
}

pub fn execute_latest(connection: &ConnectionArgs) -> CommandResult {
    let db = connection.open_database()?;
    match db.with_session(|s| s.latest())? {
        Some(dish) => println!("{}", dish),
        None => println!("The dish table is empty."),
    }
    Ok(())
}

pub fn execute_list(connection: &ConnectionArgs) -> CommandResult {
    let db = connection.open_database()?;
    print_dishes(&db.with_session(|s| s.list())?);
    Ok(())
}

pub fn execute_count(connection: &ConnectionArgs) -> CommandResult {
    let db = connection.open_database()?;
    println!("{}", db.with_session(|s| s.count())?);
    Ok(())
}
