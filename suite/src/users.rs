use restcheck::{
    api_test, test_data, validate, ApiContext, Error, RequestDescriptor, Resource,
};

const USER_ID: u32 = 1;

#[api_test("GET /users returns 200 and 10 users")]
#[ignore = "requires the live fixture service"]
fn get_all_users(ctx: &ApiContext) -> Result<(), Error> {
    let response = ctx.send(&RequestDescriptor::for_get(Resource::Users.path()))?;

    validate::status_code(&response, 200)?;
    validate::body_array_length(&response, 10)?;
    Ok(())
}

#[api_test("GET /users/{id} returns specific user")]
#[ignore = "requires the live fixture service"]
fn get_user_by_id(ctx: &ApiContext) -> Result<(), Error> {
    let response = ctx.send(&RequestDescriptor::for_get(Resource::Users.item_path(USER_ID)))?;

    validate::status_code(&response, 200)?;
    validate::body_field(&response, "id", USER_ID)?;
    Ok(())
}

#[api_test("POST /users creates new user")]
#[ignore = "requires the live fixture service"]
fn create_user(ctx: &ApiContext) -> Result<(), Error> {
    let request = RequestDescriptor::for_post(Resource::Users.path(), &test_data::user_data())?;
    let response = ctx.send(&request)?;

    validate::status_code(&response, 201)?;
    validate::body_field(&response, "address.geo.lat", "40.7128")?;
    validate::body_field(&response, "company.catchPhrase", "Testing is our business")?;
    Ok(())
}

#[api_test("PUT /users/{id} updates existing user")]
#[ignore = "requires the live fixture service"]
fn update_user(ctx: &ApiContext) -> Result<(), Error> {
    let request =
        RequestDescriptor::for_put(Resource::Users.item_path(USER_ID), &test_data::user_data())?;
    let response = ctx.send(&request)?;

    validate::status_code(&response, 200)?;
    Ok(())
}

#[api_test("DELETE /users/{id} deletes user")]
#[ignore = "requires the live fixture service"]
fn delete_user(ctx: &ApiContext) -> Result<(), Error> {
    let response = ctx.send(&RequestDescriptor::for_delete(Resource::Users.item_path(USER_ID)))?;

    validate::status_code(&response, 200)?;
    Ok(())
}

#[api_test("GET /users/{id} validates JSON schema")]
#[ignore = "requires the live fixture service"]
fn user_json_schema(ctx: &ApiContext) -> Result<(), Error> {
    let response = ctx.send(&RequestDescriptor::for_get(Resource::Users.item_path(USER_ID)))?;

    validate::status_code(&response, 200)?;
    validate::json_schema(&response, ctx.schemas(), Resource::Users.schema_id())?;
    Ok(())
}
