mod guild_config;
mod starred_message;
