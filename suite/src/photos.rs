use restcheck::{
    api_test, test_data, validate, ApiContext, Error, RequestDescriptor, Resource,
};

const PHOTO_ID: u32 = 1;

#[api_test("GET /photos returns 200 and 5000 photos")]
#[ignore = "requires the live fixture service"]
fn get_all_photos(ctx: &ApiContext) -> Result<(), Error> {
    let response = ctx.send(&RequestDescriptor::for_get(Resource::Photos.path()))?;

    validate::status_code(&response, 200)?;
    validate::body_array_length(&response, 5000)?;
    Ok(())
}

#[api_test("GET /photos/{id} returns specific photo")]
#[ignore = "requires the live fixture service"]
fn get_photo_by_id(ctx: &ApiContext) -> Result<(), Error> {
    let response = ctx.send(&RequestDescriptor::for_get(Resource::Photos.item_path(PHOTO_ID)))?;

    validate::status_code(&response, 200)?;
    validate::body_field(&response, "id", PHOTO_ID)?;
    Ok(())
}

#[api_test("POST /photos creates new photo")]
#[ignore = "requires the live fixture service"]
fn create_photo(ctx: &ApiContext) -> Result<(), Error> {
    let request = RequestDescriptor::for_post(Resource::Photos.path(), &test_data::photo_data())?;
    let response = ctx.send(&request)?;

    validate::status_code(&response, 201)?;
    Ok(())
}

#[api_test("PUT /photos/{id} updates existing photo")]
#[ignore = "requires the live fixture service"]
fn update_photo(ctx: &ApiContext) -> Result<(), Error> {
    let request = RequestDescriptor::for_put(
        Resource::Photos.item_path(PHOTO_ID),
        &test_data::photo_data(),
    )?;
    let response = ctx.send(&request)?;

    validate::status_code(&response, 200)?;
    Ok(())
}

#[api_test("DELETE /photos/{id} deletes photo")]
#[ignore = "requires the live fixture service"]
fn delete_photo(ctx: &ApiContext) -> Result<(), Error> {
    let response = ctx.send(&RequestDescriptor::for_delete(Resource::Photos.item_path(PHOTO_ID)))?;

    validate::status_code(&response, 200)?;
    Ok(())
}

#[api_test("GET /photos/{id} validates JSON schema")]
#[ignore = "requires the live fixture service"]
fn photo_json_schema(ctx: &ApiContext) -> Result<(), Error> {
    let response = ctx.send(&RequestDescriptor::for_get(Resource::Photos.item_path(PHOTO_ID)))?;

    validate::status_code(&response, 200)?;
    validate::json_schema(&response, ctx.schemas(), Resource::Photos.schema_id())?;
    Ok(())
}
