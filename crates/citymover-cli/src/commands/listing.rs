//! Owner commands: post, edit, delete
//!
//! Each command logs in with `--username`/`--password` first.

use clap::Args;
use citymover_core::rules::{EditPatch, ListingForm};
use citymover_engine::messages;
use serde_json::json;

use super::{CliResult, Context, Credentials};

#[derive(Debug, Args)]
pub struct PostArgs {
    #[command(flatten)]
    pub credentials: Credentials,

    /// City id
    #[arg(long)]
    pub city: Option<i64>,

    /// Area from the picker
    #[arg(long)]
    pub area: Option<String>,

    /// New area name, used when --area is not given
    #[arg(long, default_value = "")]
    pub area_text: String,

    #[arg(long, default_value = "")]
    pub title: String,

    #[arg(long, default_value = "")]
    pub description: String,

    #[arg(long, default_value = "")]
    pub rent: String,

    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub lat: String,

    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub lon: String,

    #[arg(long, default_value = "")]
    pub services: String,
}

/// Fields left out keep their current value; pass an empty string to clear
#[derive(Debug, Args)]
pub struct EditArgs {
    #[command(flatten)]
    pub credentials: Credentials,

    /// Listing id
    #[arg(long)]
    pub id: i64,

    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub area: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(long)]
    pub rent: Option<String>,

    #[arg(long, allow_hyphen_values = true)]
    pub lat: Option<String>,

    #[arg(long, allow_hyphen_values = true)]
    pub lon: Option<String>,

    #[arg(long)]
    pub services: Option<String>,
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    #[command(flatten)]
    pub credentials: Credentials,

    /// Listing id
    #[arg(long)]
    pub id: i64,
}

pub fn post(ctx: &Context, args: PostArgs) -> CliResult {
    let owner = args.credentials.authenticate(&ctx.db)?;
    let form = ListingForm {
        city_id: args.city,
        area_choice: args.area,
        area_text: args.area_text,
        title: args.title,
        description: args.description,
        rent: args.rent,
        lat: args.lat,
        lon: args.lon,
        services: args.services,
    };

    let id = citymover_engine::post_listing(&ctx.db, &owner, form)?;
    ctx.emit(&json!({ "id": id }), |_| {
        println!("{} (#{})", messages::LISTING_SAVED, id);
    })
}

pub fn edit(ctx: &Context, args: EditArgs) -> CliResult {
    let owner = args.credentials.authenticate(&ctx.db)?;
    let patch = EditPatch {
        title: args.title,
        area: args.area,
        description: args.description,
        rent: args.rent,
        lat: args.lat,
        lon: args.lon,
        services: args.services,
    };

    let changed = citymover_engine::patch_listing(&ctx.db, owner.id, args.id, patch)?;
    if !changed {
        return Err(messages::LISTING_UNCHANGED.into());
    }
    ctx.emit(&json!({ "id": args.id, "changed": changed }), |_| {
        println!("{}", messages::LISTING_UPDATED);
    })
}

pub fn delete(ctx: &Context, args: DeleteArgs) -> CliResult {
    let owner = args.credentials.authenticate(&ctx.db)?;
    let removed = citymover_engine::remove_listing(&ctx.db, owner.id, args.id)?;
    if !removed {
        return Err(messages::LISTING_UNCHANGED.into());
    }
    ctx.emit(&json!({ "id": args.id, "removed": removed }), |_| {
        println!("{}", messages::LISTING_DELETED);
    })
}
