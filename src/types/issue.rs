use serde::{Deserialize, Deserializer, Serialize};

/// One reported civic issue as returned by the issues endpoint.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Issue {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub summary: String,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rating: i64,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub address: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
    pub acknowledged_at: Option<String>,
    pub closed_at: Option<String>,
    pub reopened_at: Option<String>,
    pub updated_at: Option<String>,
    pub shortened_url: Option<String>,
    pub url: Option<String>,
    #[serde(default)]
    pub point: Option<Point>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub private_visibility: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub html_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub request_type: RequestType,
    pub comment_url: Option<String>,
    pub flag_url: Option<String>,
    #[serde(default)]
    pub transitions: Option<Transitions>,
    #[serde(default)]
    pub reporter: Option<Reporter>,
    #[serde(default)]
    pub media: Option<Media>,
}

impl Issue {
    /// Point coordinates in `[longitude, latitude]` order, empty when the
    /// point is missing.
    pub fn coordinates(&self) -> &[f64] {
        self.point
            .as_ref()
            .map(|p| p.coordinates.as_slice())
            .unwrap_or_default()
    }
}

/// Reads JSON `null` as the type's default, like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// GeoJSON point. Authoritative over the scalar `lat`/`lng` fields.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct Point {
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub coordinates: Vec<f64>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct RequestType {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub organization: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub related_issues_url: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct Transitions {
    pub close_url: Option<String>,
    pub open_url: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct Reporter {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub role: Option<String>,
    pub avatar: Option<Avatar>,
    pub html_url: Option<String>,
    pub witty_title: Option<String>,
    pub civic_points: Option<i64>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct Avatar {
    pub full: Option<String>,
    pub square_100x100: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct Media {
    pub video_url: Option<String>,
    pub image_full: Option<String>,
    pub image_square_100x100: Option<String>,
    pub representative_image_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_full_issue() {
        let issue: Issue = serde_json::from_value(json!({
            "id": 9876543,
            "status": "Acknowledged",
            "summary": "Fallen tree",
            "description": "Blocking the sidewalk",
            "rating": 2,
            "lat": 40.7184,
            "lng": -74.0431,
            "address": "280 Grove St Jersey City, NJ",
            "created_at": "2021-05-01T00:00:00Z",
            "acknowledged_at": "2021-05-02T10:00:00-04:00",
            "closed_at": null,
            "reopened_at": null,
            "updated_at": "2021-05-02T10:00:00-04:00",
            "shortened_url": null,
            "url": "https://seeclickfix.com/api/v2/issues/9876543",
            "point": { "type": "Point", "coordinates": [-74.0431, 40.7184] },
            "private_visibility": false,
            "html_url": "https://seeclickfix.com/issues/9876543",
            "request_type": {
                "id": 42,
                "title": "Tree Down",
                "organization": "Trees",
                "url": "https://seeclickfix.com/api/v2/request_types/42",
                "related_issues_url": "https://seeclickfix.com/api/v2/issues?request_types=42"
            },
            "comment_url": "https://seeclickfix.com/api/v2/issues/9876543/comments",
            "flag_url": "https://seeclickfix.com/api/v2/issues/9876543/flag",
            "transitions": { "close_url": "https://seeclickfix.com/api/v2/issues/9876543/close" },
            "reporter": {
                "id": 1,
                "name": "Resident",
                "role": "Registered User",
                "avatar": { "full": "https://x/a.png", "square_100x100": "https://x/b.png" },
                "html_url": "https://seeclickfix.com/users/1",
                "witty_title": "Street Smart",
                "civic_points": 120
            },
            "media": {
                "video_url": null,
                "image_full": null,
                "image_square_100x100": null,
                "representative_image_url": "https://x/c.png"
            }
        }))
        .unwrap();

        assert_eq!(issue.id, 9876543);
        assert_eq!(issue.request_type.organization, "Trees");
        assert_eq!(issue.coordinates(), &[-74.0431, 40.7184]);
        assert!(issue.closed_at.is_none());
        assert_eq!(issue.acknowledged_at.as_deref(), Some("2021-05-02T10:00:00-04:00"));
    }

    #[test]
    fn test_missing_point_has_no_coordinates() {
        let issue: Issue = serde_json::from_value(json!({
            "id": 1,
            "status": "Open",
            "summary": "Pothole",
            "created_at": "2021-05-01T00:00:00Z",
            "html_url": "https://x/y/1",
            "request_type": { "organization": "Potholes" }
        }))
        .unwrap();

        assert!(issue.coordinates().is_empty());
        assert!(issue.reporter.is_none());
    }

    #[test]
    fn test_null_fields_read_as_defaults() {
        let issue: Issue = serde_json::from_value(json!({
            "id": 2,
            "status": null,
            "summary": null,
            "rating": null,
            "created_at": null,
            "html_url": null,
            "private_visibility": null,
            "point": { "type": null, "coordinates": null },
            "request_type": null
        }))
        .unwrap();

        assert_eq!(issue.summary, "");
        assert_eq!(issue.rating, 0);
        assert_eq!(issue.request_type.organization, "");
        assert!(issue.coordinates().is_empty());
    }

    #[test]
    fn test_null_organization_reads_as_empty() {
        let issue: Issue = serde_json::from_value(json!({
            "id": 3,
            "status": "Open",
            "summary": "Graffiti",
            "created_at": "2021-05-01T00:00:00Z",
            "html_url": "https://x/y/3",
            "request_type": { "organization": null, "title": null }
        }))
        .unwrap();

        assert_eq!(issue.request_type.organization, "");
    }
}
