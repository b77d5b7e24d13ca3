diesel::table! {
    repositories (id) {
        id -> Integer,
        name -> Text,
        namespace -> Text,
        url -> Nullable<Text>,
    }
}

diesel::table! {
    charts (id) {
        id -> Integer,
        chart_id -> Text,
        namespace -> Text,
        name -> Text,
        description -> Nullable<Text>,
        home -> Nullable<Text>,
        icon -> Nullable<Text>,
        category -> Nullable<Text>,
        keywords -> Nullable<Jsonb>,
        sources -> Nullable<Jsonb>,
        repository_id -> Integer,
    }
}

diesel::table! {
    chart_versions (id) {
        id -> Integer,
        chart_key -> Integer,
        version -> Text,
        app_version -> Nullable<Text>,
        created -> Nullable<Text>,
        digest -> Nullable<Text>,
        urls -> Nullable<Jsonb>,
    }
}

diesel::table! {
    maintainers (id) {
        id -> Integer,
        name -> Text,
        email -> Nullable<Text>,
    }
}

diesel::table! {
    chart_maintainers (rowid) {
        rowid -> Integer,
        chart_key -> Integer,
        maintainer_id -> Integer,
    }
}

diesel::joinable!(charts -> repositories (repository_id));
diesel::joinable!(chart_versions -> charts (chart_key));
diesel::joinable!(chart_maintainers -> maintainers (maintainer_id));

diesel::allow_tables_to_appear_in_same_query!(
    repositories,
    charts,
    chart_versions,
    maintainers,
    chart_maintainers,
);
