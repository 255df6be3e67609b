use colored::Colorize;
use hypernote::api::{Answer, Intent};
use hypernote::config::HypernoteConfig;
use hypernote::model::{NoteDraft, ParsedList};
use hypernote::tags::{GroupCommand, ManagementCommand, TagCommand};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const ITEM_INDENT: &str = "  ";

pub(super) fn print_intent(intent: &Intent) {
    match intent {
        Intent::Hyper(draft) => print_draft(draft),
        Intent::Command(cmd) => {
            let heading = match cmd {
                ManagementCommand::Tag(_) => "Tag command",
                ManagementCommand::Group(_) => "Group command",
            };
            println!("{}", heading.cyan().bold());
            println!("{}{}", ITEM_INDENT, describe_command(cmd));
        }
        Intent::InvalidRename(err) => {
            println!("{}", "Invalid rename".red().bold());
            println!("{}{}", ITEM_INDENT, err);
        }
        Intent::Text(text) => {
            println!("{}", "Plain text".dimmed());
            println!("{}{}", ITEM_INDENT, text);
        }
    }
}

fn print_draft(draft: &NoteDraft) {
    println!("{}", "New note".green().bold());
    print_field("title", &draft.title);
    print_field("content", &draft.content);
    if !draft.tags.is_empty() {
        let tags: Vec<&str> = draft.tags.iter().map(String::as_str).collect();
        print_field("tags", &tags.join(", "));
    }
    if let Some(color) = draft.color {
        print_field("color", color.as_str());
    }
    if let Some(font) = &draft.font_family {
        print_field("font", font);
    }

    let flags: Vec<&str> = [
        (draft.is_pinned, "pinned"),
        (draft.is_favorite, "favorite"),
        (draft.is_private, "private"),
        (draft.is_hidden, "hidden"),
    ]
    .iter()
    .filter(|(set, _)| *set)
    .map(|(_, name)| *name)
    .collect();
    if !flags.is_empty() {
        print_field("flags", &flags.join(", "));
    }

    if let Some(nested) = &draft.nested_command {
        let text = format!("{} {}", nested.kind, nested.query);
        print_field("nested", text.trim_end());
    }
}

fn print_field(name: &str, value: &str) {
    let label = format!("{:<9}", format!("{}:", name));
    println!("{}{}{}", ITEM_INDENT, label.dimmed(), value);
}

pub(super) fn describe_command(cmd: &ManagementCommand) -> String {
    match cmd {
        ManagementCommand::Tag(TagCommand::Edit {
            tag_type,
            old_name,
            new_name,
        }) => format!("rename {} '{}' to '{}'", tag_type, old_name, new_name),
        ManagementCommand::Tag(TagCommand::Delete {
            tag_type,
            tag_name,
        }) => format!("delete {} '{}'", tag_type, tag_name),
        ManagementCommand::Tag(TagCommand::Pin { tag_type, tag_name }) => {
            format!("pin {} '{}'", tag_type, tag_name)
        }
        ManagementCommand::Tag(TagCommand::Star { tag_type, tag_name }) => {
            format!("star {} '{}'", tag_type, tag_name)
        }
        ManagementCommand::Group(GroupCommand::Create { group_name }) => {
            format!("create group '{}'", group_name)
        }
        ManagementCommand::Group(GroupCommand::Delete { group_name }) => {
            format!("delete group '{}'", group_name)
        }
        ManagementCommand::Group(GroupCommand::Enter { group_name }) => {
            format!("enter group '{}'", group_name)
        }
        ManagementCommand::Group(GroupCommand::Rename { old_name, new_name }) => {
            format!("rename group '{}' to '{}'", old_name, new_name)
        }
        ManagementCommand::Group(GroupCommand::Action { kind }) => {
            format!("group action {}", kind.keyword())
        }
    }
}

pub(super) fn print_lists(lists: &[ParsedList]) {
    if lists.is_empty() {
        println!("No lists found.");
        return;
    }

    for (i, list) in lists.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!(
            "{} {}",
            list.list_type.label().bold(),
            format!("({} items)", list.items.len()).dimmed()
        );
        for item in &list.items {
            let idx = format!("{}. ", item.position);
            let available = LINE_WIDTH.saturating_sub(ITEM_INDENT.width() + idx.width());
            let one_line = item.content.replace('\n', " ");
            println!(
                "{}{}{}",
                ITEM_INDENT,
                idx.yellow(),
                truncate_to_width(&one_line, available)
            );
        }
    }
}

pub(super) fn print_answer(answer: &Answer) {
    let result = &answer.result;
    if !result.is_positional {
        println!("{}", "Not a positional question.".dimmed());
        return;
    }

    match &answer.grounding {
        Some(grounding) => println!("{}", grounding),
        None => {
            let position = result.position.unwrap_or_default();
            println!(
                "{}",
                format!("No note has an item #{}.", position).yellow()
            );
        }
    }
}

pub(super) fn print_config(config: &HypernoteConfig) {
    println!("default_title = {:?}", config.default_title);
    println!();
    println!("[scoring]");
    println!("base_score = {:?}", config.scoring.base_score);
    println!("topic_word_weight = {:?}", config.scoring.topic_word_weight);
    println!("item_count_weight = {:?}", config.scoring.item_count_weight);
    println!("min_topic_word_len = {}", config.scoring.min_topic_word_len);
}

pub(super) fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
