use crate::graphql::build_schema;
use crate::store::StoreHandle;
use anyhow::Result;

pub fn handle_schema() -> Result<()> {
    let schema = build_schema(StoreHandle::default());
    println!("{}", schema.sdl());
    Ok(())
}
