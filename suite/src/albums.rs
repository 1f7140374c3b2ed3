use restcheck::{
    api_test, test_data, validate, ApiContext, Error, RequestDescriptor, Resource,
};

const ALBUM_ID: u32 = 1;

#[api_test("GET /albums returns 200")]
#[ignore = "requires the live fixture service"]
fn get_all_albums(ctx: &ApiContext) -> Result<(), Error> {
    let response = ctx.send(&RequestDescriptor::for_get(Resource::Albums.path()))?;

    validate::status_code(&response, 200)?;
    Ok(())
}

#[api_test("GET /albums/{id} returns specific album")]
#[ignore = "requires the live fixture service"]
fn get_album_by_id(ctx: &ApiContext) -> Result<(), Error> {
    let response = ctx.send(&RequestDescriptor::for_get(Resource::Albums.item_path(ALBUM_ID)))?;

    validate::status_code(&response, 200)?;
    validate::body_field(&response, "id", ALBUM_ID)?;
    Ok(())
}

#[api_test("POST /albums creates new album")]
#[ignore = "requires the live fixture service"]
fn create_album(ctx: &ApiContext) -> Result<(), Error> {
    let request = RequestDescriptor::for_post(Resource::Albums.path(), &test_data::album_data())?;
    let response = ctx.send(&request)?;

    validate::status_code(&response, 201)?;
    validate::body_field(&response, "title", "Test Album Title")?;
    Ok(())
}

#[api_test("PUT /albums/{id} updates existing album")]
#[ignore = "requires the live fixture service"]
fn update_album(ctx: &ApiContext) -> Result<(), Error> {
    let request = RequestDescriptor::for_put(
        Resource::Albums.item_path(ALBUM_ID),
        &test_data::album_data(),
    )?;
    let response = ctx.send(&request)?;

    validate::status_code(&response, 200)?;
    validate::body_field(&response, "title", "Test Album Title")?;
    Ok(())
}

#[api_test("DELETE /albums/{id} deletes album")]
#[ignore = "requires the live fixture service"]
fn delete_album(ctx: &ApiContext) -> Result<(), Error> {
    let response = ctx.send(&RequestDescriptor::for_delete(Resource::Albums.item_path(ALBUM_ID)))?;

    validate::status_code(&response, 200)?;
    Ok(())
}

#[api_test("GET /albums/{id} validates JSON schema")]
#[ignore = "requires the live fixture service"]
fn album_json_schema(ctx: &ApiContext) -> Result<(), Error> {
    let response = ctx.send(&RequestDescriptor::for_get(Resource::Albums.item_path(ALBUM_ID)))?;

    validate::status_code(&response, 200)?;
    validate::json_schema(&response, ctx.schemas(), Resource::Albums.schema_id())?;
    Ok(())
}
