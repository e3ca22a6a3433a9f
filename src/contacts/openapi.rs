//! OpenAPI 3.0 description of the contacts API, served at `/openapi.json`.

use axum::Json;
use serde_json::{json, Value};

pub async fn openapi_document() -> Json<Value> {
    Json(document())
}

pub fn document() -> Value {
    let person_id = json!({
        "name": "id",
        "in": "path",
        "required": true,
        "description": "Unique identifier of a person",
        "schema": { "type": "integer", "format": "int64", "minimum": 1 }
    });
    let person_body = json!({
        "required": true,
        "content": {
            "application/json": { "schema": { "$ref": "#/components/schemas/Person" } }
        }
    });
    let person_response = |description: &str| {
        json!({
            "description": description,
            "content": {
                "application/json": { "schema": { "$ref": "#/components/schemas/Person" } }
            }
        })
    };

    json!({
        "openapi": "3.0.3",
        "info": {
            "title": "Address book",
            "description": "A service that manipulates contacts in an address book.",
            "version": env!("CARGO_PKG_VERSION"),
        },
        "paths": {
            "/contacts": {
                "get": {
                    "summary": "List all users",
                    "description": "List all users saved in the address book",
                    "responses": {
                        "200": {
                            "description": "The address book",
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/AddressBook" }
                                }
                            }
                        }
                    }
                },
                "post": {
                    "summary": "Saves a user",
                    "description": "Saves a user in the address book",
                    "requestBody": person_body,
                    "responses": {
                        "201": person_response("The user, also available at the Location header"),
                        "400": { "description": "Malformed person payload" }
                    }
                }
            },
            "/contacts/person/{id}": {
                "parameters": [person_id],
                "get": {
                    "summary": "Find user",
                    "description": "Finds user by ID inside the address book",
                    "responses": {
                        "200": person_response("The user"),
                        "404": { "description": "User not found" }
                    }
                },
                "put": {
                    "summary": "Update user",
                    "description": "Update user depending on ID in the address book",
                    "requestBody": person_body,
                    "responses": {
                        "200": person_response("The user"),
                        "400": { "description": "Person with that ID does not exist, or malformed payload" }
                    }
                },
                "delete": {
                    "summary": "Delete user",
                    "description": "Delete user depending on ID in the address book",
                    "responses": {
                        "204": { "description": "The user was correctly deleted" },
                        "404": { "description": "The user does not exist" }
                    }
                }
            }
        },
        "components": {
            "schemas": {
                "Person": {
                    "type": "object",
                    "properties": {
                        "id": { "type": "integer", "format": "int64" },
                        "name": { "type": "string" },
                        "href": { "type": "string", "format": "uri" }
                    }
                },
                "AddressBook": {
                    "type": "object",
                    "properties": {
                        "personList": {
                            "type": "array",
                            "items": { "$ref": "#/components/schemas/Person" }
                        }
                    }
                }
            }
        }
    })
}
