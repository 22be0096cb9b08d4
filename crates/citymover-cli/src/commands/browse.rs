//! Read-only commands: cities, areas, browse, listings, show

use clap::{ArgGroup, Args};
use citymover_core::{CityMoverError, ExError, Property, PropertyListing};
use citymover_engine::queries::{self, BrowseOutcome};
use citymover_engine::messages;

use super::{CliResult, Context};

#[derive(Debug, Args)]
pub struct AreasArgs {
    /// City id
    #[arg(long)]
    pub city: i64,
}

#[derive(Debug, Args)]
pub struct BrowseArgs {
    /// City id
    #[arg(long)]
    pub city: Option<i64>,

    #[arg(long)]
    pub area: Option<String>,
}

#[derive(Debug, Args)]
#[command(group(ArgGroup::new("scope").required(true).args(["city", "owner"])))]
pub struct ListingsArgs {
    /// Every listing in this city
    #[arg(long)]
    pub city: Option<i64>,

    /// Listings owned by this user id
    #[arg(long)]
    pub owner: Option<i64>,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Listing id
    #[arg(long)]
    pub id: i64,
}

fn opt<T: ToString>(value: &Option<T>) -> String {
    value.as_ref().map(T::to_string).unwrap_or_else(|| "-".to_string())
}

fn print_listing(listing: &PropertyListing) {
    let p = &listing.property;
    println!(
        "#{} {} | {} | rent {} | owner {}",
        p.id,
        p.title,
        opt(&p.area),
        opt(&p.rent),
        listing.owner_username
    );
}

fn print_property(p: &Property) {
    println!("#{} {}", p.id, p.title);
    println!("  city: {}  area: {}", p.city_id, opt(&p.area));
    println!("  rent: {}", opt(&p.rent));
    if let Some((lat, lon)) = p.coordinates() {
        println!("  location: {}, {}", lat, lon);
    }
    if let Some(description) = &p.description {
        println!("  {}", description);
    }
    if let Some(services) = &p.services {
        println!("  services: {}", services);
    }
}

pub fn cities(ctx: &Context) -> CliResult {
    let cities = queries::cities(&ctx.db);
    ctx.emit(&cities, |cities| {
        for city in cities {
            println!("{:>3}  {}", city.id, city.name);
        }
    })
}

pub fn areas(ctx: &Context, args: AreasArgs) -> CliResult {
    let options = queries::areas_for_city(&ctx.db, args.city);
    if options.city.is_none() {
        return Err(ExError::from(CityMoverError::CityNotFound { city_id: args.city }).into());
    }
    ctx.emit(&options, |options| {
        if options.restricted {
            println!("{}", messages::active_areas_hint());
        }
        for option in &options.options {
            let mark = if option.active { "✓" } else { " " };
            println!("{} {}", mark, option.name);
        }
    })
}

pub fn browse(ctx: &Context, args: BrowseArgs) -> CliResult {
    let outcome = queries::browse(&ctx.db, args.city, args.area.as_deref());
    ctx.emit(&outcome, |outcome| {
        if let BrowseOutcome::Listings { listings, .. } = outcome {
            listings.iter().for_each(print_listing);
        }
        if let Some(notice) = messages::browse_message(outcome) {
            println!("{}", notice);
        }
    })
}

pub fn listings(ctx: &Context, args: ListingsArgs) -> CliResult {
    match (args.city, args.owner) {
        (Some(city_id), _) => {
            let listings = queries::listings_for_city(&ctx.db, city_id);
            ctx.emit(&listings, |listings| listings.iter().for_each(print_listing))
        }
        (None, Some(owner_id)) => {
            let mine = queries::my_listings(&ctx.db, owner_id);
            ctx.emit(&mine, |mine| {
                if mine.is_empty() {
                    println!("{}", messages::NO_OWN_LISTINGS);
                }
                for owned in mine {
                    print_listing(&owned.listing);
                    if owned.active_area {
                        println!("  ✓ active area");
                    }
                }
            })
        }
        (None, None) => Err("either --city or --owner is required".into()),
    }
}

pub fn show(ctx: &Context, args: ShowArgs) -> CliResult {
    let property = queries::listing(&ctx.db, args.id).ok_or_else(|| {
        ExError::from(CityMoverError::PropertyNotFound {
            property_id: args.id,
        })
    })?;
    ctx.emit(&property, print_property)
}
