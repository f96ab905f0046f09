mod helpers;
mod test_auth_flows;
mod test_social_flows;
