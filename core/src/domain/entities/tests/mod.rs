mod email_message_tests;
mod reset_token_tests;
