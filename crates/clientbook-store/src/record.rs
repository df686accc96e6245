use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The caller-supplied text fields of a client.
///
/// Used as the payload for create, replace and merge. Missing fields
/// deserialize to empty strings; the store never validates contents.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct ClientFields {
    #[schema(example = "Jane Doe")]
    pub name: String,
    #[schema(example = "5551234")]
    pub tel: String,
    #[schema(example = "90210")]
    pub zipcode: String,
    #[schema(example = "1 Main St")]
    pub address: String,
}

impl ClientFields {
    pub fn new(
        name: impl Into<String>,
        tel: impl Into<String>,
        zipcode: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            tel: tel.into(),
            zipcode: zipcode.into(),
            address: address.into(),
        }
    }

    /// Returns `true` if every field is empty.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.tel.is_empty()
            && self.zipcode.is_empty()
            && self.address.is_empty()
    }

    /// Overwrite all four fields of `client`, empty values included.
    pub fn replace_into(self, client: &mut Client) {
        client.name = self.name;
        client.tel = self.tel;
        client.zipcode = self.zipcode;
        client.address = self.address;
    }

    /// Copy the non-empty fields onto `client`, leaving the others alone.
    pub fn merge_into(self, client: &mut Client) {
        if !self.name.is_empty() {
            client.name = self.name;
        }
        if !self.tel.is_empty() {
            client.tel = self.tel;
        }
        if !self.zipcode.is_empty() {
            client.zipcode = self.zipcode;
        }
        if !self.address.is_empty() {
            client.address = self.address;
        }
    }
}

/// A stored client record.
///
/// `id` is a UUID v4 rendered as lowercase hyphenated text. It is set by
/// [`Client::new`] and there is no setter for it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub struct Client {
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    id: String,
    #[schema(example = "Jane Doe")]
    pub name: String,
    #[schema(example = "5551234")]
    pub tel: String,
    #[schema(example = "90210")]
    pub zipcode: String,
    #[schema(example = "1 Main St")]
    pub address: String,
}

impl Client {
    /// Build a record from `fields` with a freshly generated id.
    pub fn new(fields: ClientFields) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: fields.name,
            tel: fields.tel,
            zipcode: fields.zipcode,
            address: fields.address,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// The mutable fields as a standalone value.
    pub fn fields(&self) -> ClientFields {
        ClientFields {
            name: self.name.clone(),
            tel: self.tel.clone(),
            zipcode: self.zipcode.clone(),
            address: self.address.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> ClientFields {
        ClientFields::new("Jane Doe", "5551234", "90210", "1 Main St")
    }

    #[test]
    fn new_assigns_v4_uuid() {
        let client = Client::new(jane());
        let parsed = uuid::Uuid::parse_str(client.id()).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
        assert_eq!(parsed.to_string(), client.id());
        assert_eq!(client.fields(), jane());
    }

    #[test]
    fn ids_differ_between_records() {
        assert_ne!(Client::new(jane()).id(), Client::new(jane()).id());
    }

    #[test]
    fn merge_skips_empty_fields() {
        let mut client = Client::new(jane());
        ClientFields {
            name: "X".into(),
            ..Default::default()
        }
        .merge_into(&mut client);
        assert_eq!(client.name, "X");
        assert_eq!(client.tel, "5551234");
        assert_eq!(client.zipcode, "90210");
        assert_eq!(client.address, "1 Main St");
    }

    #[test]
    fn replace_clears_empty_fields() {
        let mut client = Client::new(jane());
        let id = client.id().to_string();
        ClientFields {
            name: "X".into(),
            ..Default::default()
        }
        .replace_into(&mut client);
        assert_eq!(client.id(), id);
        assert_eq!(client.fields(), ClientFields::new("X", "", "", ""));
    }

    #[test]
    fn fields_deserialize_with_defaults() {
        let fields: ClientFields = serde_json::from_str(r#"{"name":"Ana","extra":1}"#).unwrap();
        assert_eq!(fields.name, "Ana");
        assert!(fields.tel.is_empty());
        assert!(!fields.is_empty());
        assert!(ClientFields::default().is_empty());
    }

    #[test]
    fn client_serializes_wire_names() {
        let client = Client::new(jane());
        let json = serde_json::to_value(&client).unwrap();
        assert_eq!(json["id"], client.id());
        assert_eq!(json["tel"], "5551234");
        assert_eq!(json["zipcode"], "90210");
    }
}
