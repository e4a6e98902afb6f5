diesel::table! {
    #[sql_name = "CONCERT"]
    concerts (id) {
        #[sql_name = "ID"]
        id -> BigInt,
        #[sql_name = "TITLE"]
        title -> Text,
        #[sql_name = "DATE"]
        held_at -> Timestamp,
        #[sql_name = "FK_PERFORMER_ID"]
        fk_performer_id -> BigInt,
    }
}

diesel::table! {
    #[sql_name = "PERFORMER"]
    performers (id) {
        #[sql_name = "ID"]
        id -> BigInt,
        #[sql_name = "NAME"]
        name -> Text,
        #[sql_name = "IMAGE_REF"]
        image_ref -> Text,
        #[sql_name = "GENRE"]
        genre -> Text,
    }
}

diesel::joinable!(concerts -> performers (fk_performer_id));

diesel::allow_tables_to_appear_in_same_query!(concerts, performers,);
