///////////////////////////////////////////////////////////////////////
// Users
///////////////////////////////////////////////////////////////////////

table! {
    users (id) {
        id -> Text,
        email -> Text,
        display_name -> Text,
        password -> Text,
        role -> SmallInt,
        created_at -> BigInt,
    }
}

///////////////////////////////////////////////////////////////////////
// Reports
///////////////////////////////////////////////////////////////////////

table! {
    reports (id) {
        id -> Text,
        title -> Text,
        description -> Text,
        status -> SmallInt,
        lat -> Nullable<Double>,
        lng -> Nullable<Double>,
        address -> Nullable<Text>,
        city -> Nullable<Text>,
        reporter -> Text,
        vote_count -> Integer,
        final_vote_count -> Nullable<Integer>,
        voting_open_at -> Nullable<BigInt>,
        voting_close_at -> Nullable<BigInt>,
        created_at -> BigInt,
        updated_at -> BigInt,
    }
}

table! {
    report_media (report_id, pos) {
        report_id -> Text,
        pos -> Integer,
        url -> Text,
    }
}

joinable!(report_media -> reports (report_id));

table! {
    report_votes (id) {
        id -> Text,
        report_id -> Text,
        user_id -> Text,
        created_at -> BigInt,
    }
}

joinable!(report_votes -> reports (report_id));

table! {
    status_logs (rowid) {
        rowid -> BigInt,
        id -> Text,
        report_id -> Text,
        from_status -> SmallInt,
        to_status -> SmallInt,
        changed_by -> Nullable<Text>,
        reason -> Nullable<Text>,
        created_at -> BigInt,
    }
}

joinable!(status_logs -> reports (report_id));

table! {
    report_resolutions (id) {
        id -> Text,
        report_id -> Text,
        resolved_by -> Text,
        description -> Text,
        created_at -> BigInt,
    }
}

table! {
    resolution_evidence (resolution_id, pos) {
        resolution_id -> Text,
        pos -> Integer,
        url -> Text,
    }
}

joinable!(resolution_evidence -> report_resolutions (resolution_id));

///////////////////////////////////////////////////////////////////////
// Authorities
///////////////////////////////////////////////////////////////////////

table! {
    authorities (id) {
        id -> Text,
        name -> Nullable<Text>,
        category -> Text,
        role -> Text,
        city -> Text,
        contact_mode -> SmallInt,
        email -> Nullable<Text>,
        phone -> Nullable<Text>,
        website -> Nullable<Text>,
        other_contact -> Nullable<Text>,
        submitted_by -> Text,
        created_at -> BigInt,
    }
}

table! {
    report_authorities (id) {
        id -> Text,
        report_id -> Text,
        authority_id -> Text,
        status -> SmallInt,
        contacted_by -> Text,
        message -> Nullable<Text>,
        contacted_at -> BigInt,
        updated_at -> BigInt,
    }
}

joinable!(report_authorities -> reports (report_id));
joinable!(report_authorities -> authorities (authority_id));

///////////////////////////////////////////////////////////////////////
// Drives
///////////////////////////////////////////////////////////////////////

table! {
    drives (id) {
        id -> Text,
        title -> Text,
        description -> Text,
        status -> SmallInt,
        organizer -> Text,
        participant_target -> Integer,
        date -> Nullable<BigInt>,
        lat -> Nullable<Double>,
        lng -> Nullable<Double>,
        address -> Nullable<Text>,
        city -> Nullable<Text>,
        vote_count -> Integer,
        final_vote_count -> Nullable<Integer>,
        voting_open_at -> Nullable<BigInt>,
        voting_close_at -> Nullable<BigInt>,
        created_at -> BigInt,
        updated_at -> BigInt,
    }
}

table! {
    drive_reports (drive_id, report_id) {
        drive_id -> Text,
        report_id -> Text,
    }
}

joinable!(drive_reports -> drives (drive_id));
joinable!(drive_reports -> reports (report_id));

table! {
    drive_votes (id) {
        id -> Text,
        drive_id -> Text,
        user_id -> Text,
        created_at -> BigInt,
    }
}

joinable!(drive_votes -> drives (drive_id));

table! {
    drive_volunteers (drive_id, user_id) {
        drive_id -> Text,
        user_id -> Text,
        joined_at -> BigInt,
    }
}

joinable!(drive_volunteers -> drives (drive_id));

table! {
    drive_enhancements (id) {
        id -> Text,
        drive_id -> Text,
        suggested_by -> Text,
        content -> Text,
        created_at -> BigInt,
    }
}

joinable!(drive_enhancements -> drives (drive_id));

table! {
    tasks (id) {
        id -> Text,
        drive_id -> Text,
        report_id -> Nullable<Text>,
        title -> Text,
        description -> Nullable<Text>,
        status -> SmallInt,
        assignee -> Nullable<Text>,
        created_at -> BigInt,
        updated_at -> BigInt,
    }
}

joinable!(tasks -> drives (drive_id));

///////////////////////////////////////////////////////////////////////
// Monitoring and discussions
///////////////////////////////////////////////////////////////////////

table! {
    monitorings (id) {
        id -> Text,
        report_id -> Text,
        drive_id -> Nullable<Text>,
        monitor -> Text,
        status -> SmallInt,
        notes -> Nullable<Text>,
        started_at -> BigInt,
        completed_at -> Nullable<BigInt>,
    }
}

joinable!(monitorings -> reports (report_id));

table! {
    discussions (id) {
        id -> Text,
        report_id -> Nullable<Text>,
        drive_id -> Nullable<Text>,
        author -> Text,
        phase -> SmallInt,
        content -> Text,
        created_at -> BigInt,
    }
}

allow_tables_to_appear_in_same_query!(
    users,
    reports,
    report_media,
    report_votes,
    status_logs,
    report_resolutions,
    resolution_evidence,
    authorities,
    report_authorities,
    drives,
    drive_reports,
    drive_votes,
    drive_volunteers,
    drive_enhancements,
    tasks,
    monitorings,
    discussions,
);
