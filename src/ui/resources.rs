use crate::domain::column::{render_row_number, render_timestamp, ColumnDescriptor};

/// The list resources the console can show. Each carries its API path and the
/// table shape; the single generic list view is parametrized by this enum
/// instead of one hand-rolled screen per resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Languages,
    Topics,
    Difficulties,
    QuestionTypes,
    Questions,
    Players,
    Hosts,
    Plans,
    GameHistory,
    Admins,
}

impl Resource {
    pub const ALL: [Resource; 10] = [
        Resource::Languages,
        Resource::Topics,
        Resource::Difficulties,
        Resource::QuestionTypes,
        Resource::Questions,
        Resource::Players,
        Resource::Hosts,
        Resource::Plans,
        Resource::GameHistory,
        Resource::Admins,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Resource::Languages => "Languages",
            Resource::Topics => "Topics",
            Resource::Difficulties => "Difficulties",
            Resource::QuestionTypes => "Question types",
            Resource::Questions => "Questions",
            Resource::Players => "Players",
            Resource::Hosts => "Hosts",
            Resource::Plans => "Subscription plans",
            Resource::GameHistory => "Game history",
            Resource::Admins => "Admins",
        }
    }

    /// Path segment under the API base URL.
    pub fn path(self) -> &'static str {
        match self {
            Resource::Languages => "languages",
            Resource::Topics => "topics",
            Resource::Difficulties => "difficulties",
            Resource::QuestionTypes => "question-types",
            Resource::Questions => "questions",
            Resource::Players => "players",
            Resource::Hosts => "hosts",
            Resource::Plans => "plans",
            Resource::GameHistory => "games",
            Resource::Admins => "admins",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        Resource::ALL.into_iter().find(|r| r.path() == path)
    }

    /// Filter parameters this resource's list endpoint understands.
    pub fn filter_keys(self) -> &'static [&'static str] {
        match self {
            Resource::Topics | Resource::Questions => &["language_id"],
            _ => &[],
        }
    }

    /// Fields offered in the sort dropdown.
    pub fn sort_keys(self) -> &'static [&'static str] {
        match self {
            Resource::Languages => &["name", "code", "created_at"],
            Resource::Topics => &["name", "question_count", "created_at"],
            Resource::Difficulties => &["name", "level"],
            Resource::QuestionTypes => &["name", "code"],
            Resource::Questions => &["text", "created_at"],
            Resource::Players => &["username", "games_played", "created_at"],
            Resource::Hosts => &["name", "subscription_expires_at", "created_at"],
            Resource::Plans => &["name", "price", "duration_days"],
            Resource::GameHistory => &["started_at", "player_count"],
            Resource::Admins => &["name", "created_at"],
        }
    }

    pub fn columns(self) -> Vec<ColumnDescriptor> {
        let number = ColumnDescriptor::new("#", "id")
            .with_width("48px")
            .with_render(render_row_number);
        match self {
            Resource::Languages => vec![
                number,
                ColumnDescriptor::new("Name", "name"),
                ColumnDescriptor::new("Code", "code").with_width("80px"),
                ColumnDescriptor::new("Active", "is_active").with_width("70px"),
                ColumnDescriptor::new("Created", "created_at").with_render(render_timestamp),
            ],
            Resource::Topics => vec![
                number,
                ColumnDescriptor::new("Topic", "name"),
                ColumnDescriptor::new("Language", "language_name").with_width("120px"),
                ColumnDescriptor::new("Questions", "question_count").with_width("90px"),
                ColumnDescriptor::new("Active", "is_active").with_width("70px"),
            ],
            Resource::Difficulties => vec![
                number,
                ColumnDescriptor::new("Name", "name"),
                ColumnDescriptor::new("Level", "level").with_width("70px"),
                ColumnDescriptor::new("Active", "is_active").with_width("70px"),
            ],
            Resource::QuestionTypes => vec![
                number,
                ColumnDescriptor::new("Name", "name"),
                ColumnDescriptor::new("Code", "code").with_width("110px"),
                ColumnDescriptor::new("Active", "is_active").with_width("70px"),
            ],
            Resource::Questions => vec![
                number,
                ColumnDescriptor::new("Question", "text").with_width("40%"),
                ColumnDescriptor::new("Topic", "topic_name"),
                ColumnDescriptor::new("Difficulty", "difficulty_name").with_width("100px"),
                ColumnDescriptor::new("Type", "question_type_name").with_width("110px"),
                ColumnDescriptor::new("Language", "language_name").with_width("100px"),
            ],
            Resource::Players => vec![
                number,
                ColumnDescriptor::new("Username", "username"),
                ColumnDescriptor::new("Email", "email"),
                ColumnDescriptor::new("Games", "games_played").with_width("70px"),
                ColumnDescriptor::new("Joined", "created_at").with_render(render_timestamp),
            ],
            Resource::Hosts => vec![
                number,
                ColumnDescriptor::new("Name", "name"),
                ColumnDescriptor::new("Email", "email"),
                ColumnDescriptor::new("Plan", "plan_name").with_width("120px"),
                ColumnDescriptor::new("Status", "subscription_status").with_width("90px"),
                ColumnDescriptor::new("Expires", "subscription_expires_at")
                    .with_render(render_timestamp),
            ],
            Resource::Plans => vec![
                number,
                ColumnDescriptor::new("Plan", "name"),
                ColumnDescriptor::new("Price", "price").with_width("80px"),
                ColumnDescriptor::new("Days", "duration_days").with_width("70px"),
                ColumnDescriptor::new("Game limit", "game_limit").with_width("90px"),
                ColumnDescriptor::new("Active", "is_active").with_width("70px"),
            ],
            Resource::GameHistory => vec![
                number,
                ColumnDescriptor::new("Code", "code").with_width("90px"),
                ColumnDescriptor::new("Host", "host_name"),
                ColumnDescriptor::new("Topic", "topic_name"),
                ColumnDescriptor::new("Players", "player_count").with_width("70px"),
                ColumnDescriptor::new("Status", "status").with_width("90px"),
                ColumnDescriptor::new("Started", "started_at").with_render(render_timestamp),
            ],
            Resource::Admins => vec![
                number,
                ColumnDescriptor::new("Name", "name"),
                ColumnDescriptor::new("Email", "email"),
                ColumnDescriptor::new("Role", "role").with_width("100px"),
                ColumnDescriptor::new("Active", "is_active").with_width("70px"),
            ],
        }
    }
}
