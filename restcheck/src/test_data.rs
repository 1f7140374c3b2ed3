//! Canonical payloads for the fixture service's six resources.
//!
//! Every factory returns a fresh, fully-populated value with literal fields, so two
//! calls always compare equal and tests can assert on exact echoes.

use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Resource {
    Posts,
    Comments,
    Albums,
    Photos,
    Todos,
    Users,
}

impl Resource {
    pub const ALL: [Resource; 6] = [
        Resource::Posts,
        Resource::Comments,
        Resource::Albums,
        Resource::Photos,
        Resource::Todos,
        Resource::Users,
    ];

    /// Collection path, e.g. `/posts`.
    pub fn path(&self) -> &'static str {
        match self {
            Resource::Posts => "/posts",
            Resource::Comments => "/comments",
            Resource::Albums => "/albums",
            Resource::Photos => "/photos",
            Resource::Todos => "/todos",
            Resource::Users => "/users",
        }
    }

    pub fn item_path(&self, id: u32) -> String {
        format!("{}/{}", self.path(), id)
    }

    pub fn schema_id(&self) -> &'static str {
        match self {
            Resource::Posts => "post-schema.json",
            Resource::Comments => "comment-schema.json",
            Resource::Albums => "album-schema.json",
            Resource::Photos => "photo-schema.json",
            Resource::Todos => "todo-schema.json",
            Resource::Users => "user-schema.json",
        }
    }

    /// Number of records the fixture service publishes for this resource.
    pub fn collection_size(&self) -> usize {
        match self {
            Resource::Posts => 100,
            Resource::Comments => 500,
            Resource::Albums => 100,
            Resource::Photos => 5000,
            Resource::Todos => 200,
            Resource::Users => 10,
        }
    }

    pub fn payload(&self) -> TestDataPayload {
        match self {
            Resource::Posts => TestDataPayload::Post(post_data()),
            Resource::Comments => TestDataPayload::Comment(comment_data()),
            Resource::Albums => TestDataPayload::Album(album_data()),
            Resource::Photos => TestDataPayload::Photo(photo_data()),
            Resource::Todos => TestDataPayload::Todo(todo_data()),
            Resource::Users => TestDataPayload::User(user_data()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    pub user_id: u32,
    pub title: String,
    pub body: String,
}

impl Post {
    pub fn with_id(mut self, id: u32) -> Self {
        self.id = Some(id);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub post_id: u32,
    pub name: String,
    pub email: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    pub user_id: u32,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub album_id: u32,
    pub title: String,
    pub url: String,
    pub thumbnail_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub user_id: u32,
    pub title: String,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Geo {
    pub lat: String,
    pub lng: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Address {
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,
    pub geo: Geo,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub name: String,
    pub catch_phrase: String,
    pub bs: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub name: String,
    pub username: String,
    pub email: String,
    pub address: Address,
    pub phone: String,
    pub website: String,
    pub company: Company,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TestDataPayload {
    Post(Post),
    Comment(Comment),
    Album(Album),
    Photo(Photo),
    Todo(Todo),
    User(User),
}

impl TestDataPayload {
    pub fn resource(&self) -> Resource {
        match self {
            TestDataPayload::Post(_) => Resource::Posts,
            TestDataPayload::Comment(_) => Resource::Comments,
            TestDataPayload::Album(_) => Resource::Albums,
            TestDataPayload::Photo(_) => Resource::Photos,
            TestDataPayload::Todo(_) => Resource::Todos,
            TestDataPayload::User(_) => Resource::Users,
        }
    }

    pub fn to_value(&self) -> Value {
        // plain structs of strings, integers and booleans always serialize
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

pub fn post_data() -> Post {
    Post {
        id: None,
        user_id: 1,
        title: String::from("Test Post Title"),
        body: String::from("Test post body content for API testing"),
    }
}

pub fn comment_data() -> Comment {
    Comment {
        post_id: 1,
        name: String::from("Test Comment"),
        email: String::from("test@example.com"),
        body: String::from("Test comment body content"),
    }
}

pub fn album_data() -> Album {
    Album {
        user_id: 1,
        title: String::from("Test Album Title"),
    }
}

pub fn photo_data() -> Photo {
    Photo {
        album_id: 1,
        title: String::from("Test Photo Title"),
        url: String::from("https://via.placeholder.com/600/test"),
        thumbnail_url: String::from("https://via.placeholder.com/150/test"),
    }
}

pub fn todo_data() -> Todo {
    Todo {
        user_id: 1,
        title: String::from("Test Todo Title"),
        completed: false,
    }
}

pub fn user_data() -> User {
    User {
        name: String::from("Test User"),
        username: String::from("testuser"),
        email: String::from("testuser@example.com"),
        address: Address {
            street: String::from("Test Street"),
            suite: String::from("Apt. 123"),
            city: String::from("Test City"),
            zipcode: String::from("12345"),
            geo: Geo {
                lat: String::from("40.7128"),
                lng: String::from("-74.0060"),
            },
        },
        phone: String::from("123-456-7890"),
        website: String::from("testuser.com"),
        company: Company {
            name: String::from("Test Company"),
            catch_phrase: String::from("Testing is our business"),
            bs: String::from("test automation solutions"),
        },
    }
}
