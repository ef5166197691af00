// Mirrors migrations/2024-03-01-000000_create_scheduler

diesel::table! {
    scheduler (id) {
        id -> BigInt,
        date -> Text,
        title -> Text,
        comment -> Text,
        repeat -> Text,
    }
}
