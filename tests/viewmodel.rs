#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate};
    use tudu::libs::selection::{CategoryFilter, GroupMode, Selection, SortMode, View};
    use tudu::libs::task::{Category, Priority, Task};
    use tudu::libs::viewmodel::{derive_view, planned_buckets, sort_tasks, visible_tasks, DerivedCache, SectionLabel};

    fn task(id: i64, text: &str) -> Task {
        let mut t = Task::new(text);
        t.id = id;
        // Deterministic creation times, later ids created later.
        t.created_at = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(9, 0, 0).unwrap() + Duration::minutes(id);
        t
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn tasks_view_hides_archived_and_keeps_order() {
        let mut archived = task(2, "archived");
        archived.archived = true;
        let tasks = vec![task(1, "first"), archived, task(3, "third")];

        let visible = visible_tasks(&tasks, &Selection::default());
        let ids: Vec<i64> = visible.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn archived_tasks_never_reach_special_views() {
        let mut t = task(1, "hidden");
        t.archived = true;
        t.my_day = true;
        t.important = true;
        t.due_date = Some(date(2024, 1, 10));
        let tasks = vec![t];

        for view in [View::MyDay, View::Important, View::Planned, View::Tasks] {
            assert!(visible_tasks(&tasks, &Selection::for_view(view)).is_empty());
        }
        assert_eq!(visible_tasks(&tasks, &Selection::for_view(View::Archive)).len(), 1);
    }

    #[test]
    fn my_day_and_important_views_narrow_by_flag() {
        let mut sunny = task(1, "sunny");
        sunny.my_day = true;
        let mut starred = task(2, "starred");
        starred.important = true;
        let tasks = vec![sunny, starred, task(3, "plain")];

        let my_day = visible_tasks(&tasks, &Selection::for_view(View::MyDay));
        assert_eq!(my_day.len(), 1);
        assert_eq!(my_day[0].id, 1);

        let important = visible_tasks(&tasks, &Selection::for_view(View::Important));
        assert_eq!(important.len(), 1);
        assert_eq!(important[0].id, 2);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let tasks = vec![task(1, "Buy Milk"), task(2, "Walk the dog")];
        let selection = Selection {
            search: "MILK".to_string(),
            ..Selection::default()
        };

        let visible = visible_tasks(&tasks, &selection);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, 1);
    }

    #[test]
    fn category_filter_matches_exactly() {
        let mut work = task(1, "report");
        work.category = Some(Category::Work);
        let mut health = task(2, "run");
        health.category = Some(Category::Health);
        let tasks = vec![work, health, task(3, "uncategorized")];

        let selection = Selection {
            category: CategoryFilter::Only(Category::Work),
            ..Selection::default()
        };
        let visible = visible_tasks(&tasks, &selection);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, 1);
    }

    #[test]
    fn priority_sort_puts_unset_last() {
        let unset = task(1, "a");
        let mut high = task(2, "b");
        high.priority = Some(Priority::High);
        let mut low = task(3, "c");
        low.priority = Some(Priority::Low);
        let mut medium = task(4, "d");
        medium.priority = Some(Priority::Medium);
        let tasks = vec![unset, high, low, medium];

        let mut refs: Vec<&Task> = tasks.iter().collect();
        sort_tasks(&mut refs, SortMode::Priority);
        let ids: Vec<i64> = refs.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 4, 3, 1]);
    }

    #[test]
    fn priority_sort_is_stable_on_ties() {
        let mut first = task(1, "a");
        first.priority = Some(Priority::High);
        let mut second = task(2, "b");
        second.priority = Some(Priority::High);
        let tasks = vec![first, second];

        let mut refs: Vec<&Task> = tasks.iter().collect();
        sort_tasks(&mut refs, SortMode::Priority);
        let ids: Vec<i64> = refs.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn due_sort_puts_undated_last() {
        let undated = task(1, "a");
        let mut later = task(2, "b");
        later.due_date = Some(date(2024, 3, 1));
        let mut sooner = task(3, "c");
        sooner.due_date = Some(date(2024, 2, 1));
        let tasks = vec![undated, later, sooner];

        let mut refs: Vec<&Task> = tasks.iter().collect();
        sort_tasks(&mut refs, SortMode::Due);
        let ids: Vec<i64> = refs.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn alpha_sort_ignores_case() {
        let tasks = vec![task(1, "banana"), task(2, "Apple")];
        let mut refs: Vec<&Task> = tasks.iter().collect();
        sort_tasks(&mut refs, SortMode::Alpha);
        let ids: Vec<i64> = refs.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn created_sort_is_newest_first() {
        let tasks = vec![task(1, "old"), task(2, "new")];
        let mut refs: Vec<&Task> = tasks.iter().collect();
        sort_tasks(&mut refs, SortMode::Created);
        let ids: Vec<i64> = refs.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn important_sort_puts_starred_first() {
        let plain = task(1, "a");
        let mut starred = task(2, "b");
        starred.important = true;
        let tasks = vec![plain, starred];

        let mut refs: Vec<&Task> = tasks.iter().collect();
        sort_tasks(&mut refs, SortMode::Important);
        let ids: Vec<i64> = refs.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn planned_buckets_split_on_today() {
        let today = date(2024, 1, 10);
        let mut past = task(1, "past");
        past.due_date = Some(date(2024, 1, 5));
        let mut due_today = task(2, "today");
        due_today.due_date = Some(today);
        let mut due_tomorrow = task(3, "tomorrow");
        due_tomorrow.due_date = Some(date(2024, 1, 11));
        let mut far = task(4, "far");
        far.due_date = Some(date(2024, 2, 1));
        let undated = task(5, "undated");
        let tasks = vec![past, due_today, due_tomorrow, far, undated];

        let refs: Vec<&Task> = tasks.iter().collect();
        let buckets = planned_buckets(&refs, today);
        assert_eq!(buckets.earlier.len(), 1);
        assert_eq!(buckets.today.len(), 1);
        assert_eq!(buckets.tomorrow.len(), 1);
        assert_eq!(buckets.future.len(), 1);
        assert_eq!(buckets.earlier[0].id, 1);
        assert_eq!(buckets.today[0].id, 2);
        assert_eq!(buckets.tomorrow[0].id, 3);
        assert_eq!(buckets.future[0].id, 4);
    }

    #[test]
    fn planned_view_always_renders_four_sections() {
        let selection = Selection::for_view(View::Planned);
        let output = derive_view(&[], &selection, date(2024, 1, 10));

        let labels: Vec<SectionLabel> = output.sections.iter().map(|s| s.label).collect();
        assert_eq!(
            labels,
            vec![SectionLabel::Earlier, SectionLabel::Today, SectionLabel::Tomorrow, SectionLabel::Future]
        );
        assert!(output.is_empty());
    }

    #[test]
    fn grouping_by_completion_drops_empty_groups() {
        let tasks = vec![task(1, "a"), task(2, "b")];
        let selection = Selection {
            group: GroupMode::Completed,
            ..Selection::default()
        };

        let output = derive_view(&tasks, &selection, date(2024, 1, 10));
        assert_eq!(output.sections.len(), 1);
        assert_eq!(output.sections[0].label, SectionLabel::Pending);
        assert_eq!(output.sections[0].tasks.len(), 2);
    }

    #[test]
    fn grouping_by_importance_partitions_totally() {
        let mut starred = task(1, "a");
        starred.important = true;
        let tasks = vec![starred, task(2, "b"), task(3, "c")];
        let selection = Selection {
            group: GroupMode::Important,
            sort: SortMode::Alpha,
            ..Selection::default()
        };

        let output = derive_view(&tasks, &selection, date(2024, 1, 10));
        assert_eq!(output.sections.len(), 2);
        assert_eq!(output.sections[0].label, SectionLabel::Important);
        assert_eq!(output.sections[1].label, SectionLabel::Others);
        assert_eq!(output.len(), 3);
    }

    #[test]
    fn no_grouping_yields_single_section() {
        let tasks = vec![task(1, "a")];
        let output = derive_view(&tasks, &Selection::default(), date(2024, 1, 10));
        assert_eq!(output.sections.len(), 1);
        assert_eq!(output.sections[0].label, SectionLabel::All);
    }

    #[test]
    fn cache_recomputes_only_on_changed_inputs() {
        let tasks = vec![task(1, "a")];
        let selection = Selection::default();
        let today = date(2024, 1, 10);
        let mut cache = DerivedCache::new();

        cache.derive(&tasks, 1, &selection, today);
        cache.derive(&tasks, 1, &selection, today);
        assert_eq!(cache.recomputes(), 1);

        cache.derive(&tasks, 2, &selection, today);
        assert_eq!(cache.recomputes(), 2);

        let other = Selection::for_view(View::Important);
        cache.derive(&tasks, 2, &other, today);
        assert_eq!(cache.recomputes(), 3);

        cache.derive(&tasks, 2, &other, date(2024, 1, 11));
        assert_eq!(cache.recomputes(), 4);
    }
}
