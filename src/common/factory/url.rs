use chrono::Utc;
use entities::url;
use sea_orm::Set;
use uuid::Uuid;

pub fn url(user_id: Option<Uuid>) -> url::ActiveModel {
    let url_id = Uuid::now_v7().simple().to_string()[22..].to_string();
    url::ActiveModel {
        id: Set(Uuid::now_v7()),
        short_url: Set(format!("http://127.0.0.1:5000/{}", url_id)),
        url_id: Set(url_id),
        orig_url: Set("https://www.rust-lang.org/learn".to_string()),
        clicks: Set(0),
        user_id: Set(user_id),
        created_at: Set(Utc::now().into()),
    }
}

pub trait UrlFactory {
    fn url_id(self, url_id: &str) -> url::ActiveModel;
}

impl UrlFactory for url::ActiveModel {
    fn url_id(mut self, url_id: &str) -> url::ActiveModel {
        self.short_url = Set(format!("http://127.0.0.1:5000/{}", url_id));
        self.url_id = Set(url_id.to_string());
        self
    }
}
