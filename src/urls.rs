use url::Url;

/// The parameters of a catalog search. Only the first page is ever
/// requested.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchQuery {
    /// The catalog host, without scheme.
    pub host: String,

    pub directory_id: String,
    pub locale: String,

    /// The page size. Should cover the whole directory.
    pub size: u32,

    /// Tag IDs; a session must carry one of them to be returned.
    pub tags: Vec<String>,

    pub page: u32,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            host: "aws.amazon.com".to_owned(),
            directory_id: "amer-summit".to_owned(),
            locale: "en_US".to_owned(),
            size: 302,
            tags: vec![
                "amer-summit#location#washington-dc".to_owned(),
                "amer-summit#day#2024-06-26".to_owned(),
                "amer-summit#day#2024-06-27".to_owned(),
            ],
            page: 0,
        }
    }
}

impl SearchQuery {
    /// Builds the search URL. Query values are percent-encoded, so the
    /// `#` inside tag IDs becomes `%23`.
    pub fn url(&self) -> Url {
        let base = format!("https://{}/api/dirs/items/search", self.host);
        let mut url = Url::parse(&base).unwrap_or_else(|_| panic!("parse {} as URL", base));

        {
            let mut pairs = url.query_pairs_mut();
            pairs
                .append_pair("item.directoryId", &self.directory_id)
                .append_pair("size", &self.size.to_string())
                .append_pair("item.locale", &self.locale);

            for tag in &self.tags {
                pairs.append_pair("tags.id", tag);
            }

            pairs.append_pair("page", &self.page.to_string());
        }

        url
    }
}

#[cfg(test)]
mod tests {
    use super::SearchQuery;

    #[test]
    fn default_query_matches_catalog_url() {
        assert_eq!(
            SearchQuery::default().url().as_str(),
            "https://aws.amazon.com/api/dirs/items/search?item.directoryId=amer-summit&size=302&item.locale=en_US&tags.id=amer-summit%23location%23washington-dc&tags.id=amer-summit%23day%232024-06-26&tags.id=amer-summit%23day%232024-06-27&page=0"
        );
    }

    #[test]
    fn tags_are_repeated_in_order() {
        let query = SearchQuery {
            tags: vec!["b".to_owned(), "a".to_owned()],
            ..SearchQuery::default()
        };

        let tags = query
            .url()
            .query_pairs()
            .filter(|(k, _)| k == "tags.id")
            .map(|(_, v)| v.into_owned())
            .collect::<Vec<_>>();

        assert_eq!(tags, vec!["b", "a"]);
    }
}
