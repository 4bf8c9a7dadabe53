use rd_core::NewUser;

pub fn new_user(email: &str, secret: &str) -> NewUser {
    NewUser::new("A", "B", email, secret)
}

pub fn new_user_with_orcid(email: &str, orcid: &str) -> NewUser {
    NewUser::new("Given", "Family", email, "secret").with_orcid(orcid)
}
