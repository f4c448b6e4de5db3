use pdf_pager::pagesize::PageFormat;
use pdf_pager::{Document, FontSet, Info, Paginator, PrintOutcome, TextRole};

fn main() {
    let fonts = FontSet::load(
        include_bytes!("../assets/fonts/DejaVuSans.ttf").to_vec(),
        include_bytes!("../assets/fonts/DejaVuSans-Bold.ttf").to_vec(),
    )
    .expect("can load fonts");

    let content = (1..=150)
        .map(|i| format!("{i:>4}  {}", lipsum::lipsum(8)))
        .collect::<Vec<_>>()
        .join("\n");

    let mut paginator = Paginator::new(content);
    paginator
        .set_page_format(PageFormat::HalfLetter)
        .set_margins_mm(12.5)
        .set_font_size(TextRole::Body, 9)
        .set_header("Lorem Ipsum\nQuarterly Report")
        .set_footer("Confidential")
        .set_info(
            Info::new()
                .title("Lorem Ipsum")
                .author("pdf-pager")
                .subject("Development Test / Example"),
        );

    let out = std::fs::File::create("paginate.pdf").expect("can create output file");
    let outcome = paginator
        .print(
            &fonts,
            |document: &Document| {
                println!(
                    "{} lines per page, {} pages",
                    paginator.max_body_lines(),
                    document.page_count()
                );
                true
            },
            std::io::BufWriter::new(out),
        )
        .expect("can print");

    if outcome == PrintOutcome::Printed {
        println!("wrote paginate.pdf");
    }
}
