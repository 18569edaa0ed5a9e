use inkmark_engine::{Segment, analyze_segment};
use inkmark_types::{Mode, UNKNOWN_WAVEFORM};

fn segment(body: &str) -> Segment {
    Segment {
        label: "01".to_string(),
        body: body.to_string(),
    }
}

#[test]
fn end_to_end_default_scenario() {
    let seg = segment(
        "[12345.678] button 1 up 123456.789\n\
         [12345.679] EPDC][5] submit\n\
         [12345.680] Sending update. height=800 waveform:0x1 (REAGL)\n\
         [12345.681] update end marker=5 end time=111222\n",
    );

    let result = analyze_segment(&seg, Mode::Default).unwrap();
    assert_eq!(result.iteration, "01");
    assert_eq!(result.start, 456789);
    assert_eq!(result.stop, 111222);
    assert_eq!(result.marker, "5");
    assert_eq!(result.duration_ms, 345567);
    assert_eq!(result.height, 800);
    assert_eq!(result.waveform, "REAGL");
    assert_eq!(result.mode, Mode::Default);
    assert_eq!(result.start_line, "[12345.678] button 1 up 123456.789");
}

#[test]
fn rerunning_the_same_segment_is_bit_identical() {
    let seg = segment(
        "button 1 up 123456.789\n\
         EPDC][3]\n\
         Sending update. height=800 waveform:0x1 (REAGL)\n\
         EPDC][12]\n\
         Sending update. height=800 waveform:0x2 (DU)\n\
         update end marker=12 end time=999999\n",
    );

    let first = analyze_segment(&seg, Mode::Default).unwrap();
    let second = analyze_segment(&seg, Mode::Default).unwrap();
    assert_eq!(first, second);
}

#[test]
fn tie_break_picks_numerically_largest_marker() {
    let seg = segment(
        "button 1 up 123456.789\n\
         EPDC][3]\n\
         Sending update. height=800 waveform:0x1 (REAGL)\n\
         EPDC][12]\n\
         Sending update. height=800 waveform:0x2 (DU)\n\
         update end marker=12 end time=999999\n",
    );

    // "12" beats "3" numerically even though "3" sorts after it lexically
    let result = analyze_segment(&seg, Mode::Default).unwrap();
    assert_eq!(result.marker, "12");
    assert_eq!(result.stop, 999999);
}

#[test]
fn tie_break_compares_zero_padded_ids_numerically() {
    let seg = segment(
        "button 1 up 123456.789\n\
         EPDC][012]\n\
         Sending update. height=800 waveform:0x1 (REAGL)\n\
         EPDC][9]\n\
         Sending update. height=800 waveform:0x2 (DU)\n\
         update end marker=9 end time=999999\n",
    );

    let result = analyze_segment(&seg, Mode::Default).unwrap();
    assert_eq!(result.marker, "012");
}

#[test]
fn unknown_waveform_is_excluded_despite_greater_height() {
    let seg = segment(
        "button 1 up 123456.789\n\
         EPDC][7]\n\
         Sending update. height=900\n\
         EPDC][4]\n\
         Sending update. height=500 waveform:0x2 (REAGL)\n\
         update end marker=4 end time=500000\n",
    );

    let result = analyze_segment(&seg, Mode::Default).unwrap();
    assert_eq!(result.marker, "4");
    assert_eq!(result.height, 500);
    // the excluded marker still appears in the snapshot
    assert_eq!(result.all_heights.len(), 2);
    assert_eq!(result.all_heights[0].marker, "7");
    assert_eq!(result.all_heights[0].waveform, UNKNOWN_WAVEFORM);
}

#[test]
fn all_unknown_waveforms_fall_back_to_every_height() {
    let seg = segment(
        "button 1 up 123456.789\n\
         EPDC][2]\n\
         Sending update. height=300\n\
         EPDC][8]\n\
         Sending update. height=200\n\
         update end marker=2 end time=999999\n",
    );

    let result = analyze_segment(&seg, Mode::Default).unwrap();
    assert_eq!(result.marker, "2");
    assert_eq!(result.height, 300);
    assert_eq!(result.waveform, UNKNOWN_WAVEFORM);
}

#[test]
fn chosen_marker_without_end_time_borrows_the_maximum() {
    let seg = segment(
        "button 1 up 123456.789\n\
         EPDC][6]\n\
         Sending update. height=700 waveform:0x2 (GC16)\n\
         update end marker=2 end time=600000\n\
         update end marker=3 end time=650000\n",
    );

    let result = analyze_segment(&seg, Mode::Default).unwrap();
    assert_eq!(result.marker, "6");
    assert_eq!(result.stop, 650000);
    assert_eq!(result.duration_ms, 193211);
}

#[test]
fn stop_before_start_folds_to_magnitude() {
    let seg = segment(
        "button 1 up 0.789\n\
         EPDC][1]\n\
         Sending update. height=100 waveform:0x2 (DU)\n\
         update end marker=1 end time=456\n",
    );

    let result = analyze_segment(&seg, Mode::Default).unwrap();
    assert_eq!(result.start, 789);
    assert_eq!(result.stop, 456);
    assert_eq!(result.duration_ms, 333);
}

#[test]
fn repeated_marker_updates_keep_only_the_last() {
    let seg = segment(
        "button 1 up 123456.789\n\
         EPDC][5]\n\
         Sending update. height=300 waveform:0x2 (DU)\n\
         Sending update. height=800 waveform:0x1 (REAGL)\n\
         update end marker=5 end time=460000\n",
    );

    let result = analyze_segment(&seg, Mode::Default).unwrap();
    assert_eq!(result.height, 800);
    assert_eq!(result.waveform, "REAGL");
    assert_eq!(result.all_heights.len(), 1);
    assert_eq!(result.all_heights[0].height, 800);
}

#[test]
fn repeated_end_times_keep_only_the_last() {
    let seg = segment(
        "button 1 up 123456.789\n\
         EPDC][5]\n\
         Sending update. height=800 waveform:0x1 (REAGL)\n\
         update end marker=5 end time=100000\n\
         update end marker=5 end time=200000\n",
    );

    let result = analyze_segment(&seg, Mode::Default).unwrap();
    assert_eq!(result.stop, 200000);
    assert_eq!(result.end_times.len(), 1);
}

#[test]
fn trimmed_empty_waveform_becomes_unknown() {
    let seg = segment(
        "button 1 up 123456.789\n\
         EPDC][5]\n\
         Sending update. height=800 waveform:0x1 ( )\n\
         update end marker=5 end time=460000\n",
    );

    let result = analyze_segment(&seg, Mode::Default).unwrap();
    assert_eq!(result.waveform, UNKNOWN_WAVEFORM);
}

#[test]
fn missing_start_yields_nothing() {
    let seg = segment(
        "EPDC][5]\n\
         Sending update. height=800 waveform:0x1 (REAGL)\n\
         update end marker=5 end time=111222\n",
    );
    assert!(analyze_segment(&seg, Mode::Default).is_none());
}

#[test]
fn missing_heights_yield_nothing() {
    let seg = segment(
        "button 1 up 123456.789\n\
         update end marker=5 end time=111222\n",
    );
    assert!(analyze_segment(&seg, Mode::Default).is_none());
}

#[test]
fn missing_end_times_yield_nothing() {
    let seg = segment(
        "button 1 up 123456.789\n\
         EPDC][5]\n\
         Sending update. height=800 waveform:0x1 (REAGL)\n",
    );
    assert!(analyze_segment(&seg, Mode::Default).is_none());
}

#[test]
fn swipe_mode_requires_the_press_trigger() {
    let body = "Sending button 1 down 123456.789\n\
                EPDC][5]\n\
                Sending update. height=800 waveform:0x1 (REAGL)\n\
                update end marker=5 end time=111222\n";
    assert!(analyze_segment(&segment(body), Mode::Default).is_none());

    let result = analyze_segment(&segment(body), Mode::Swipe).unwrap();
    assert_eq!(result.start, 456789);
    assert_eq!(result.mode, Mode::Swipe);
}
