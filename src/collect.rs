// src/collect.rs
//
// Grant collection: walk the works search for one funder page by page and
// keep the award ids attributed to that funder by name.

use std::{ collections::BTreeSet, thread, time::Duration };

use log::{ debug, error, info };

use crate::{
    config::consts::START_CURSOR,
    openalex::{ FetchError, GrantEntry, WorksPage },
    progress::Progress,
};

/// One page of works filtered by `grants.funder`, starting at `cursor`.
pub trait WorksSource {
    fn works_page(&mut self, funder_id: &str, cursor: &str) -> Result<WorksPage, FetchError>;
}

/// Wait strategy between page requests.
pub trait Pacer {
    fn pause(&mut self);
}

/// Sleep a fixed amount between pages. Ignores any server rate-limit hints.
pub struct FixedDelay(pub Duration);

impl Pacer for FixedDelay {
    fn pause(&mut self) {
        thread::sleep(self.0);
    }
}

pub struct NoDelay;
impl Pacer for NoDelay {
    fn pause(&mut self) {}
}

/// Unique award ids for one collection run, in ascending order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GrantIds(BTreeSet<String>);

impl GrantIds {
    pub fn len(&self) -> usize { self.0.len() }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    pub fn contains(&self, id: &str) -> bool { self.0.contains(id) }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0.into_iter().collect()
    }

    /// Returns true if the id was new.
    fn insert(&mut self, id: &str) -> bool {
        if self.0.contains(id) { false } else { self.0.insert(id.to_string()) }
    }
}

impl<'a> FromIterator<&'a str> for GrantIds {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut ids = GrantIds::default();
        for id in iter {
            ids.insert(id);
        }
        ids
    }
}

/// Award id of `entry` if it is non-empty and the entry is attributed to
/// exactly `funder_name`. Case-sensitive, no trimming.
pub fn matching_award<'a>(entry: &'a GrantEntry, funder_name: &str) -> Option<&'a str> {
    let award = entry.award_id.as_deref().filter(|a| !a.is_empty())?;
    (entry.funder_display_name.as_deref() == Some(funder_name)).then_some(award)
}

/// Collect every award id attributed to the funder.
///
/// The server-side filter matches on funder id, which also returns works whose
/// grant entries belong to co-funders; only entries whose display name equals
/// `funder_name` are kept.
///
/// Any failed page aborts the run and nothing collected so far is returned.
/// An `Ok` with no ids is the "no results" outcome.
pub fn collect_grant_ids<S, P>(
    source: &mut S,
    pacer: &mut P,
    funder_id: &str,
    funder_name: &str,
    mut progress: Option<&mut dyn Progress>,
) -> Result<GrantIds, FetchError>
where
    S: WorksSource + ?Sized,
    P: Pacer + ?Sized,
{
    let mut ids = GrantIds::default();
    if funder_id.trim().is_empty() || funder_name.trim().is_empty() {
        debug!("Fetch: Skipped, funder id or name is empty");
        return Ok(ids);
    }

    info!("Fetch: Begin funder={} name={:?}", funder_id, funder_name);
    if let Some(p) = progress.as_deref_mut() {
        p.begin();
    }

    let mut retrieved: u64 = 0;
    let mut cursor = START_CURSOR.to_string();
    let mut pages = 0usize;

    loop {
        let page = match source.works_page(funder_id, &cursor) {
            Ok(page) => page,
            Err(e) => {
                error!("Fetch: Error page={} funder={}: {}", pages + 1, funder_id, e);
                if let Some(p) = progress.as_deref_mut() {
                    p.log(&format!("Failed to fetch grant IDs: {e}"));
                    p.finish();
                }
                return Err(e);
            }
        };
        pages += 1;

        for work in &page.items {
            for entry in &work.grants {
                if let Some(award) = matching_award(entry, funder_name) {
                    ids.insert(award);
                }
            }
        }

        retrieved += page.items.len() as u64;
        debug!(
            "Fetch: Page {} items={} retrieved={}/{} unique={}",
            pages, page.items.len(), retrieved, page.total, ids.len()
        );
        if let Some(p) = progress.as_deref_mut() {
            p.page_done(retrieved, page.total);
        }

        match page.next_cursor {
            Some(next) => {
                cursor = next;
                pacer.pause();
            }
            None => break,
        }
    }

    info!("Fetch: OK funder={} pages={} works={} grant_ids={}", funder_id, pages, retrieved, ids.len());
    if let Some(p) = progress.as_deref_mut() {
        p.log("Fetching complete.");
        p.finish();
    }
    Ok(ids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::openalex::Work;

    fn entry(award: Option<&str>, name: Option<&str>) -> GrantEntry {
        GrantEntry {
            award_id: award.map(str::to_string),
            funder_display_name: name.map(str::to_string),
        }
    }

    #[test]
    fn match_is_exact() {
        let wt = "Wellcome Trust";
        assert_eq!(matching_award(&entry(Some("A1"), Some(wt)), wt), Some("A1"));
        assert_eq!(matching_award(&entry(Some("A1"), Some("wellcome trust")), wt), None);
        assert_eq!(matching_award(&entry(Some("A1"), Some("Wellcome Trust ")), wt), None);
        assert_eq!(matching_award(&entry(Some("A1"), None), wt), None);
    }

    #[test]
    fn empty_award_is_skipped() {
        let wt = "Wellcome Trust";
        assert_eq!(matching_award(&entry(Some(""), Some(wt)), wt), None);
        assert_eq!(matching_award(&entry(None, Some(wt)), wt), None);
    }

    struct OnePage(usize);
    impl WorksSource for OnePage {
        fn works_page(&mut self, _: &str, cursor: &str) -> Result<WorksPage, FetchError> {
            self.0 += 1;
            assert_eq!(cursor, "*");
            Ok(WorksPage {
                items: vec![Work { grants: vec![GrantEntry::new("B2", "X"), GrantEntry::new("B1", "X")] }],
                next_cursor: None,
                total: 1,
            })
        }
    }

    struct CountingPacer(usize);
    impl Pacer for CountingPacer {
        fn pause(&mut self) { self.0 += 1; }
    }

    #[test]
    fn single_page_does_not_pause() {
        let mut src = OnePage(0);
        let mut pacer = CountingPacer(0);
        let ids = collect_grant_ids(&mut src, &mut pacer, "F9", "X", None).unwrap();
        assert_eq!(src.0, 1);
        assert_eq!(pacer.0, 0);
        assert_eq!(ids.into_vec(), vec!["B1", "B2"]);
    }

    #[derive(Default)]
    struct Lines(Vec<String>);
    impl Progress for Lines {
        fn begin(&mut self) { self.0.push("begin".into()); }
        fn log(&mut self, msg: &str) { self.0.push(msg.to_string()); }
    }

    #[test]
    fn begin_is_not_followed_by_a_second_start_line() {
        let mut lines = Lines::default();
        collect_grant_ids(&mut OnePage(0), &mut NoDelay, "F9", "X", Some(&mut lines)).unwrap();
        assert_eq!(lines.0, vec!["begin", "Fetching complete."]);
    }

    #[test]
    fn blank_funder_makes_no_request() {
        let mut src = OnePage(0);
        let ids = collect_grant_ids(&mut src, &mut NoDelay, "F9", "  ", None).unwrap();
        assert!(ids.is_empty());
        assert_eq!(src.0, 0);
    }
}
