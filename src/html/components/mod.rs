use rand::seq::SliceRandom;

use super::*;

const AVATAR_COLORS: [&str; 5] = ["blue", "green", "yellow", "purple", "pink"];

/// The comment section of a post page. The page script swaps this fragment
/// out for the one returned by every comment action.
///
/// Comment text is always escaped: readers' words never become markup.
pub fn comments(session: SessionId, tree: &CommentTree, viewer: &Author) -> Markup {
    let total = tree.count();

    html! {
        #comment-section data-session=(session.to_string()) {
            p.comment-count {
                (total)
                @if total == 1 { " Comment" } @else { " Comments" }
            }
            @for (comment, depth) in tree.render() {
                (comment_card(comment, depth, viewer))
            }
        }
    }
}

fn comment_card(comment: &Comment, depth: usize, viewer: &Author) -> Markup {
    let indent = format!("margin-left: {}rem", depth * 2);

    html! {
        .comment.reply[depth > 0] data-comment=(comment.id.to_string()) style=(indent) {
            (avatar(&comment.author))
            .comment-body {
                .comment-header {
                    h4 { (comment.author.name) }
                    @if let Some(badge) = &comment.author.badge {
                        span.badge { (badge) }
                    }
                    time datetime=(comment.date.to_rfc3339()) { (comment.date_short()) }
                }
                @if let Some(reply_to) = &comment.reply_to {
                    p.replying-to { "Replying to " span { (reply_to) } }
                }
                p.content { (comment.content) }
                .comment-actions {
                    button.like.liked[comment.liked] type="button" {
                        "♥ " span.likes { (comment.likes) }
                    }
                    button.reply-toggle type="button" { "Reply" }
                    @if viewer.id == comment.author.id {
                        button.delete type="button" { "Delete" }
                    }
                }
                form.reply-form hidden {
                    (avatar(viewer))
                    textarea name="content" placeholder="Write a reply..." rows="3" {}
                    .reply-buttons {
                        button.cancel type="button" { "Cancel" }
                        button type="submit" disabled { "Reply" }
                    }
                }
            }
        }
    }
}

fn avatar(author: &Author) -> Markup {
    match &author.avatar {
        Some(src) if !src.is_empty() => html! {
            img.avatar src=(src) alt=(author.name);
        },
        _ => {
            let color = AVATAR_COLORS
                .choose(&mut rand::thread_rng())
                .copied()
                .unwrap_or(AVATAR_COLORS[0]);
            html! {
                span.avatar.initials data-color=(color) { (author.initials()) }
            }
        }
    }
}
