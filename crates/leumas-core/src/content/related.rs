use crate::domain::BlogPost;

/// Default number of related posts shown under a post.
pub const RELATED_POSTS_LIMIT: usize = 3;

/// Published posts sharing at least one tag with `post`, excluding `post`
/// itself, at most `limit` of them.
///
/// Ties are returned in catalog order; callers must not rely on that order.
pub fn related_posts<'a, I>(post: &BlogPost, candidates: I, limit: usize) -> Vec<&'a BlogPost>
where
    I: IntoIterator<Item = &'a BlogPost>,
{
    let mut related: Vec<&BlogPost> = Vec::new();

    for candidate in candidates {
        if related.len() >= limit {
            break;
        }
        if candidate.id == post.id || !candidate.is_published {
            continue;
        }
        if related.iter().any(|r| r.id == candidate.id) {
            continue;
        }
        if candidate.shares_tag_with(post) {
            related.push(candidate);
        }
    }

    related
}
