use restcheck::{
    api_test, test_data, validate, ApiContext, Error, RequestDescriptor, Resource,
};

const POST_ID: u32 = 1;
const MAX_RESPONSE_TIME_MS: u64 = 5000;

#[api_test("GET /posts returns 200 and list of posts")]
#[ignore = "requires the live fixture service"]
fn get_all_posts(ctx: &ApiContext) -> Result<(), Error> {
    let response = ctx.send(&RequestDescriptor::for_get(Resource::Posts.path()))?;

    validate::status_code(&response, 200)?;
    validate::header(&response, "Content-Type", "application/json")?;
    validate::body_array_length(&response, Resource::Posts.collection_size())?;
    Ok(())
}

#[api_test("GET /posts/{id} returns specific post")]
#[ignore = "requires the live fixture service"]
fn get_post_by_id(ctx: &ApiContext) -> Result<(), Error> {
    let response = ctx.send(&RequestDescriptor::for_get(Resource::Posts.item_path(POST_ID)))?;

    validate::status_code(&response, 200)?;
    validate::body_field(&response, "id", POST_ID)?;
    Ok(())
}

#[api_test("POST /posts creates new post")]
#[ignore = "requires the live fixture service"]
fn create_post(ctx: &ApiContext) -> Result<(), Error> {
    let request = RequestDescriptor::for_post(Resource::Posts.path(), &test_data::post_data())?;
    let response = ctx.send(&request)?;

    validate::status_code(&response, 201)?;
    validate::body_field_present(&response, "id")?;
    validate::body_field(&response, "title", "Test Post Title")?;
    Ok(())
}

#[api_test("PUT /posts/{id} updates existing post")]
#[ignore = "requires the live fixture service"]
fn update_post(ctx: &ApiContext) -> Result<(), Error> {
    let post = test_data::post_data().with_id(POST_ID);
    let request = RequestDescriptor::for_put(Resource::Posts.item_path(POST_ID), &post)?;
    let response = ctx.send(&request)?;

    validate::status_code(&response, 200)?;
    validate::body_field(&response, "id", POST_ID)?;
    Ok(())
}

#[api_test("DELETE /posts/{id} deletes post")]
#[ignore = "requires the live fixture service"]
fn delete_post(ctx: &ApiContext) -> Result<(), Error> {
    let response = ctx.send(&RequestDescriptor::for_delete(Resource::Posts.item_path(POST_ID)))?;

    validate::status_code(&response, 200)?;
    Ok(())
}

#[api_test("GET /posts?userId=1 filters posts by user")]
#[ignore = "requires the live fixture service"]
fn get_posts_by_user_id(ctx: &ApiContext) -> Result<(), Error> {
    let request =
        RequestDescriptor::for_get(Resource::Posts.path()).with_query_params(vec![("userId", "1")]);
    let response = ctx.send(&request)?;

    validate::status_code(&response, 200)?;
    validate::each_element_field(&response, "userId", 1)?;
    Ok(())
}

#[api_test("GET /posts/1/comments returns comments for post")]
#[ignore = "requires the live fixture service"]
fn get_post_comments(ctx: &ApiContext) -> Result<(), Error> {
    let path = format!("{}{}", Resource::Posts.item_path(POST_ID), Resource::Comments.path());
    let response = ctx.send(&RequestDescriptor::for_get(path))?;

    validate::status_code(&response, 200)?;
    validate::each_element_field(&response, "postId", POST_ID)?;
    Ok(())
}

#[api_test("GET /posts/{id} validates JSON schema")]
#[ignore = "requires the live fixture service"]
fn post_json_schema(ctx: &ApiContext) -> Result<(), Error> {
    let response = ctx.send(&RequestDescriptor::for_get(Resource::Posts.item_path(POST_ID)))?;

    validate::status_code(&response, 200)?;
    validate::json_schema(&response, ctx.schemas(), Resource::Posts.schema_id())?;
    Ok(())
}

#[api_test("GET /posts validates response time")]
#[ignore = "requires the live fixture service"]
fn posts_response_time(ctx: &ApiContext) -> Result<(), Error> {
    let response = ctx.send(&RequestDescriptor::for_get(Resource::Posts.path()))?;

    validate::status_code(&response, 200)?;
    validate::response_time(&response, MAX_RESPONSE_TIME_MS)?;
    Ok(())
}
