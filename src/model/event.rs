use super::Entity;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub desc: String,
    pub date: String,
    pub from: String,
    pub to: String,
    pub location_id: String,
    pub user_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEvent {
    pub title: String,
    pub desc: String,
    pub date: String,
    pub from: String,
    pub to: String,
    pub location_id: String,
    pub user_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventPatch {
    pub title: Option<String>,
    pub desc: Option<String>,
    pub date: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub location_id: Option<String>,
    pub user_id: Option<String>,
}

impl Entity for Event {
    const KIND: &'static str = "Event";

    type New = NewEvent;
    type Patch = EventPatch;

    fn create(id: String, data: NewEvent) -> Self {
        Self {
            id,
            title: data.title,
            desc: data.desc,
            date: data.date,
            from: data.from,
            to: data.to,
            location_id: data.location_id,
            user_id: data.user_id,
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn apply(&mut self, patch: EventPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(desc) = patch.desc {
            self.desc = desc;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(from) = patch.from {
            self.from = from;
        }
        if let Some(to) = patch.to {
            self.to = to;
        }
        if let Some(location_id) = patch.location_id {
            self.location_id = location_id;
        }
        if let Some(user_id) = patch.user_id {
            self.user_id = user_id;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meetup() -> Event {
        Event::create(
            "e1".to_string(),
            NewEvent {
                title: "Meetup".to_string(),
                desc: "d".to_string(),
                date: "2024-01-01".to_string(),
                from: "10:00".to_string(),
                to: "12:00".to_string(),
                location_id: "l1".to_string(),
                user_id: "u1".to_string(),
            },
        )
    }

    #[test]
    fn test_apply_overwrites_only_present_fields() {
        let mut event = meetup();
        event.apply(EventPatch {
            title: Some("Standup".to_string()),
            to: Some("10:15".to_string()),
            ..Default::default()
        });

        assert_eq!(event.title, "Standup");
        assert_eq!(event.to, "10:15");
        assert_eq!(event.from, "10:00");
        assert_eq!(event.desc, "d");
        assert_eq!(event.user_id, "u1");
        assert_eq!(event.id, "e1");
    }

    #[test]
    fn test_empty_patch_is_a_no_op() {
        let mut event = meetup();
        event.apply(EventPatch::default());
        assert_eq!(event, meetup());
    }
}
