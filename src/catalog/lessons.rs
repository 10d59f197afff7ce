//! The built-in web development curriculum.
//!
//! Three tracks, declared in order and chained through `next`:
//! HTML (`html-intro` … `html-lists`), CSS (`css-syntax` … `css-text`),
//! and JavaScript (`js-output` … `js-strict`).

use crate::model::{InitialCode, Lesson, Tier, Track};

use super::checks;

const EMPTY_MARKUP: InitialCode = InitialCode {
    markup: "<!-- Write your HTML here -->",
    style: "",
    script: "",
};

/// Every unit of the curriculum, in declaration order.
#[allow(clippy::too_many_lines)]
pub(super) fn curriculum() -> Vec<Lesson> {
    vec![
        // ── HTML ──
        Lesson {
            key: "html-intro",
            track: Track::Html,
            tier: Tier::Beginner,
            title: "HTML Introduction & Editors",
            description: "Basic document structure (<!DOCTYPE>, <html>, <head>, <body>).",
            content: r"# HTML Introduction & Editors
Every HTML document needs a specific structure to be recognized by a browser.
- `<!DOCTYPE html>` declares it's an HTML5 document.
- `<html>` is the root element.
- `<head>` contains meta information (like the title).
- `<body>` contains the visible content.

**Your Task:**
Create the basic skeleton. Inside the `<body>`, add the text 'My First Page'.",
            initial: InitialCode {
                markup: "<!DOCTYPE html>\n<html>\n<head>\n  <title>Document</title>\n</head>\n<body>\n  <!-- Add content here -->\n</body>\n</html>",
                ..InitialCode::default()
            },
            validator: Some(checks::html_intro),
            next: Some("html-basic"),
        },
        Lesson {
            key: "html-basic",
            track: Track::Html,
            tier: Tier::Beginner,
            title: "HTML Basic & Elements",
            description: "Understanding nested elements, root tags, and empty elements.",
            content: r"# HTML Elements
An element usually has a start tag and an end tag with content in between:
`<tagname>Content goes here...</tagname>`

Some elements, like `<br>`, have no content and no end tag. These are empty elements.

**Your Task:**
Write a `<h1>` tag containing 'Hello', and inside it, add a `<br>` empty element.",
            initial: EMPTY_MARKUP,
            validator: Some(checks::html_basic),
            next: Some("html-attributes"),
        },
        Lesson {
            key: "html-attributes",
            track: Track::Html,
            tier: Tier::Beginner,
            title: "HTML Attributes",
            description: "Using href, src, width, height, alt, style, title.",
            content: r#"# HTML Attributes
Attributes provide additional information about elements.
- `<a href="url">Link</a>`
- `<img src="img.jpg" alt="A photo">`

**Your Task:**
Create an `<img>` tag with a `src` of `"logo.png"`, an `alt` of `"Logo"`, and a `width` of `"100"`."#,
            initial: EMPTY_MARKUP,
            validator: Some(checks::html_attributes),
            next: Some("html-headings"),
        },
        Lesson {
            key: "html-headings",
            track: Track::Html,
            tier: Tier::Beginner,
            title: "HTML Headings",
            description: "<h1> to <h6> importance and SEO.",
            content: r"# HTML Headings
Headings run from `<h1>` (most important) to `<h6>` (least important).

**Your Task:**
Write an `<h1>` tag with 'Main Title' and an `<h2>` tag with 'Subtitle'.",
            initial: EMPTY_MARKUP,
            validator: Some(checks::html_headings),
            next: Some("html-paragraphs"),
        },
        Lesson {
            key: "html-paragraphs",
            track: Track::Html,
            tier: Tier::Beginner,
            title: "HTML Paragraphs",
            description: "The <p> tag and <br> for line breaks, <hr> for thematic breaks.",
            content: r"# HTML Paragraphs
The `<p>` tag defines a paragraph. The `<hr>` tag defines a thematic break.

**Your Task:**
Create two `<p>` blocks. Put an `<hr>` between them.",
            initial: EMPTY_MARKUP,
            validator: Some(checks::html_paragraphs),
            next: Some("html-styles"),
        },
        Lesson {
            key: "html-styles",
            track: Track::Html,
            tier: Tier::Beginner,
            title: "HTML Styles",
            description: "The style attribute (color, font, size).",
            content: r#"# HTML Styles
The `style` attribute adds styles to an element, such as color, font, and size.

**Example:**
`<p style="color:red;">Text</p>`

**Your Task:**
Create a `<p>` tag with a `style` attribute that sets `color` to `blue` and `font-size` to `20px`."#,
            initial: EMPTY_MARKUP,
            validator: Some(checks::html_styles),
            next: Some("html-formatting"),
        },
        Lesson {
            key: "html-formatting",
            track: Track::Html,
            tier: Tier::Beginner,
            title: "HTML Formatting",
            description: "<b>, <strong>, <i>, <em>, <mark>, <small>, <del>, <ins>, <sub>, <sup>.",
            content: r"# HTML Formatting Elements
Some elements give text a special meaning.
- `<b>` bold text
- `<strong>` important text
- `<i>` italic text

**Your Task:**
Write a paragraph that contains `<strong>Bold Text</strong>` and `<em>Italic Text</em>`.",
            initial: EMPTY_MARKUP,
            validator: Some(checks::html_formatting),
            next: Some("html-quotations"),
        },
        Lesson {
            key: "html-quotations",
            track: Track::Html,
            tier: Tier::Beginner,
            title: "HTML Quotations",
            description: "<blockquote>, <q>, <abbr>, <address>, <cite>, <bdo>.",
            content: r"# HTML Quotations
`<blockquote>` marks a section quoted from another source. `<q>` marks a short inline quotation.

**Your Task:**
Create a `<blockquote>` element containing 'To be or not to be'.",
            initial: EMPTY_MARKUP,
            validator: Some(checks::html_quotations),
            next: Some("html-comments"),
        },
        Lesson {
            key: "html-comments",
            track: Track::Html,
            tier: Tier::Beginner,
            title: "HTML Comments",
            description: "<!-- Comment -->.",
            content: r"# HTML Comments
Comments are not displayed in the browser, but they document your source.

`<!-- Write your comments here -->`

**Your Task:**
Create an HTML comment that says 'This is a comment'.",
            initial: EMPTY_MARKUP,
            validator: Some(checks::html_comments),
            next: Some("html-colors"),
        },
        Lesson {
            key: "html-colors",
            track: Track::Html,
            tier: Tier::Beginner,
            title: "HTML Colors",
            description: "Understanding color names, RGB, HEX, HSL, RGBA, and HSLA.",
            content: r"# HTML Colors
Colors can be given as names (Tomato), RGB, HEX, or HSL values.

**Your Task:**
Create an `<h1>` element. Set its inline style to `background-color: Tomato;`.",
            initial: EMPTY_MARKUP,
            validator: Some(checks::html_colors),
            next: Some("html-links"),
        },
        Lesson {
            key: "html-links",
            track: Track::Html,
            tier: Tier::Beginner,
            title: "HTML Links",
            description: "Hyperlinks, targets (_blank), absolute vs relative URLs, link colors.",
            content: r#"# HTML Links
Links use the `<a>` tag. The `target` attribute says where to open the linked document.

**Your Task:**
Create a link to `https://google.com` with the text 'Google'. Give it `target="_blank"` so it opens in a new tab."#,
            initial: EMPTY_MARKUP,
            validator: Some(checks::html_links),
            next: Some("html-images"),
        },
        Lesson {
            key: "html-images",
            track: Track::Html,
            tier: Tier::Beginner,
            title: "HTML Images",
            description: "<img> tag, Image Maps (<map>, <area>), Background Images, and <picture>.",
            content: r#"# HTML Images
The `<img>` tag embeds an image.

**Your Task:**
Create an `<img>` tag with `src="https://picsum.photos/200"` and `alt="Random"`."#,
            initial: EMPTY_MARKUP,
            validator: Some(checks::html_images),
            next: Some("html-favicon"),
        },
        Lesson {
            key: "html-favicon",
            track: Track::Html,
            tier: Tier::Beginner,
            title: "HTML Favicon & Page Title",
            description: "Adding an icon and title to the browser tab.",
            content: r#"# Page Title & Favicon
The `<title>` element names the browser tab. A favicon is added with `<link rel="icon">`.

**Your Task:**
Create a `<head>` block containing a `<title>` element with the text 'My Webpage'."#,
            initial: InitialCode {
                markup: "<head>\n  <!-- Add title here -->\n</head>",
                ..InitialCode::default()
            },
            validator: Some(checks::html_favicon),
            next: Some("html-tables"),
        },
        Lesson {
            key: "html-tables",
            track: Track::Html,
            tier: Tier::Beginner,
            title: "HTML Tables",
            description: "<table>, <tr>, <th>, <td>, borders, sizes, headers, padding, and colspan/rowspan.",
            content: r"# HTML Tables
A table is a `<table>`. Rows are `<tr>`, headers are `<th>`, and data cells are `<td>`.

**Your Task:**
Create a `<table>` with one `<tr>`. Inside that row, add two `<th>` tags: 'Name' and 'Age'.",
            initial: EMPTY_MARKUP,
            validator: Some(checks::html_tables),
            next: Some("html-lists"),
        },
        Lesson {
            key: "html-lists",
            track: Track::Html,
            tier: Tier::Beginner,
            title: "HTML Lists",
            description: "Unordered (<ul>), Ordered (<ol>), and Description Lists (<dl>, <dt>, <dd>).",
            content: r"# HTML Lists
`<ul>` creates an unordered list and `<ol>` an ordered one. Items are `<li>`.

**Your Task:**
Create an `<ol>` ordered list with two `<li>` elements containing 'First' and 'Second'.",
            initial: EMPTY_MARKUP,
            validator: Some(checks::html_lists),
            next: Some("css-syntax"),
        },
        // ── CSS ──
        Lesson {
            key: "css-syntax",
            track: Track::Css,
            tier: Tier::Intermediate,
            title: "CSS Syntax & Selectors",
            description: "Elements, IDs (#id), Classes (.class), grouping, and universal selectors.",
            content: r"# CSS Selectors
Selectors tell the browser which elements to style.
- Element: `h1 { color: red; }`
- Class: `.bg-dark { background: black; }`
- ID: `#header { font-size: 20px; }`

**Your Task:**
Make all `<h1>` elements `color: red`, and give elements with class `.important` `font-weight: bold`.",
            initial: InitialCode {
                markup: "<h1 class=\"important\">Hello</h1>\n<h1>World</h1>",
                style: "/* Write CSS here */",
                script: "",
            },
            validator: Some(checks::css_syntax),
            next: Some("css-howto"),
        },
        Lesson {
            key: "css-howto",
            track: Track::Css,
            tier: Tier::Intermediate,
            title: "CSS How To",
            description: "Inline, Internal (<style>), and External (<link>) stylesheets.",
            content: r#"# CSS How To
Internal CSS lives in a `<style>` tag in the `<head>`.
Inline CSS uses the `style` attribute directly on an element.

**Your Task:**
Add inline CSS to the `<body>` tag to set `color: green`.
`<body style="...">`"#,
            initial: InitialCode {
                markup: "<!-- Update the body tag below -->\n<body>\n  <p>Test Text</p>\n</body>",
                ..InitialCode::default()
            },
            validator: Some(checks::css_howto),
            next: Some("css-colors"),
        },
        Lesson {
            key: "css-colors",
            track: Track::Css,
            tier: Tier::Intermediate,
            title: "CSS Colors",
            description: "Applying colors to backgrounds, text, and borders.",
            content: r"# CSS Colors
Colors can be a name (`red`), HEX (`#ff0000`), or RGB (`rgb(255,0,0)`).

**Your Task:**
Target the `div` element. Set its `background-color` to `#000000` and its text `color` to `#ffffff`.",
            initial: InitialCode {
                markup: "<div>Dark Mode Box</div>",
                style: "div {\n  \n}",
                script: "",
            },
            validator: Some(checks::css_colors),
            next: Some("css-backgrounds"),
        },
        Lesson {
            key: "css-backgrounds",
            track: Track::Css,
            tier: Tier::Intermediate,
            title: "CSS Backgrounds",
            description: "background-color, image, repeat, attachment, position, and shorthand.",
            content: r#"# CSS Backgrounds
`background-image` sets an image as the background.

**Your Task:**
Target the `body`. Set `background-image` to `url("bg.png")` and `background-repeat` to `no-repeat`."#,
            initial: InitialCode {
                markup: "",
                style: "body {\n  \n}",
                script: "",
            },
            validator: Some(checks::css_backgrounds),
            next: Some("css-borders"),
        },
        Lesson {
            key: "css-borders",
            track: Track::Css,
            tier: Tier::Intermediate,
            title: "CSS Borders",
            description: "Style, width, color, individual sides, shorthand, and rounded borders.",
            content: r"# CSS Borders
The shorthand is `border: 2px solid red;`. Rounded corners use `border-radius`.

**Your Task:**
Target `.card`. Add a `border` of `1px solid black` and a `border-radius` of `10px`.",
            initial: InitialCode {
                markup: "<div class=\"card\">Card content</div>",
                style: ".card {\n  \n}",
                script: "",
            },
            validator: Some(checks::css_borders),
            next: Some("css-margins"),
        },
        Lesson {
            key: "css-margins",
            track: Track::Css,
            tier: Tier::Intermediate,
            title: "CSS Margins",
            description: "Creating space outside elements and understanding Margin Collapse.",
            content: r"# CSS Margins
Margins clear transparent space outside an element's border.

**Your Task:**
Target the `.box` class. Give it a `margin` of `20px`.",
            initial: InitialCode {
                markup: "<div class=\"box\">Box</div>",
                style: ".box {\n  background: gray;\n}",
                script: "",
            },
            validator: Some(checks::css_margins),
            next: Some("css-padding"),
        },
        Lesson {
            key: "css-padding",
            track: Track::Css,
            tier: Tier::Intermediate,
            title: "CSS Padding",
            description: "Creating space inside elements and box-sizing: border-box.",
            content: r"# CSS Padding
Padding clears space inside an element's border.

**Your Task:**
Target `.box`. Add `padding: 30px`.",
            initial: InitialCode {
                markup: "<div class=\"box\">Box</div>",
                style: ".box {\n  background: gray;\n}",
                script: "",
            },
            validator: Some(checks::css_padding),
            next: Some("css-height-width"),
        },
        Lesson {
            key: "css-height-width",
            track: Track::Css,
            tier: Tier::Intermediate,
            title: "CSS Height & Width",
            description: "Sizing elements responsively.",
            content: r"# Height & Width
`height` and `width` set the size of an element.

**Your Task:**
Target `.image-placeholder`. Set its `width` to `100%` and its `height` to `200px`.",
            initial: InitialCode {
                markup: "<div class=\"image-placeholder\"></div>",
                style: ".image-placeholder {\n  background: blue;\n}",
                script: "",
            },
            validator: Some(checks::css_height_width),
            next: Some("css-box-model"),
        },
        Lesson {
            key: "css-box-model",
            track: Track::Css,
            tier: Tier::Intermediate,
            title: "CSS Box Model",
            description: "Combining margins, borders, padding, and content.",
            content: r"# Box Model
Content + Padding + Border + Margin = Box Model.

**Your Task:**
Target `.container` and give it:
1. `width: 300px`
2. `padding: 20px`
3. `border: 5px solid gray`
4. `margin: 10px`",
            initial: InitialCode {
                markup: "<div class=\"container\">Content</div>",
                style: ".container {\n  \n}",
                script: "",
            },
            validator: Some(checks::css_box_model),
            next: Some("css-outline"),
        },
        Lesson {
            key: "css-outline",
            track: Track::Css,
            tier: Tier::Intermediate,
            title: "CSS Outline",
            description: "Differences between outline and borders, outline offsets.",
            content: r"# Outline
An outline is drawn outside the border to make an element stand out.
Unlike a border, it takes up no space.

**Your Task:**
Target `button`. Set `outline` to `2px solid blue`.",
            initial: InitialCode {
                markup: "<button>Click Here</button>",
                style: "button {\n  border: 1px solid black;\n}",
                script: "",
            },
            validator: Some(checks::css_outline),
            next: Some("css-text"),
        },
        Lesson {
            key: "css-text",
            track: Track::Css,
            tier: Tier::Intermediate,
            title: "CSS Text",
            description: "Alignment, decoration, transformation, spacing, and shadows.",
            content: r"# CSS Text
- `text-align: center;`
- `text-decoration: underline;`
- `text-transform: uppercase;`

**Your Task:**
Target `h1`. Make it `text-transform: uppercase` and `text-align: center`.",
            initial: InitialCode {
                markup: "<h1>Title</h1>",
                style: "h1 {\n  \n}",
                script: "",
            },
            validator: Some(checks::css_text),
            next: Some("js-output"),
        },
        // ── JavaScript ──
        Lesson {
            key: "js-output",
            track: Track::JavaScript,
            tier: Tier::Advanced,
            title: "JS Output & Where To",
            description: "<script> tags (head vs body), innerHTML, window.alert(), console.log().",
            content: r#"# JS Output
JavaScript has no print function, but `console.log("text")` writes to the console.

**Your Task:**
Log the word `"Ready"` to the console."#,
            initial: InitialCode {
                script: "// Write your JS here",
                ..InitialCode::default()
            },
            validator: Some(checks::js_output),
            next: Some("js-syntax"),
        },
        Lesson {
            key: "js-syntax",
            track: Track::JavaScript,
            tier: Tier::Advanced,
            title: "JS Syntax & Statements",
            description: "Values, literals, variables, expressions, keywords.",
            content: r"# Syntax
A JavaScript program is a list of statements.

**Your Task:**
`x` is `5` and `y` is `6`. Assign their sum to `z`.",
            initial: InitialCode {
                script: "let x = 5;\nlet y = 6;\n// Calculate z here\n",
                ..InitialCode::default()
            },
            validator: Some(checks::js_syntax),
            next: Some("js-variables"),
        },
        Lesson {
            key: "js-variables",
            track: Track::JavaScript,
            tier: Tier::Advanced,
            title: "JS Variables",
            description: "var, let, and const (block scope vs function scope).",
            content: r"# Variables
`let` creates block-scoped variables. `const` creates constants.

**Your Task:**
Declare a constant named `PI` and assign it `3.14159`.",
            initial: InitialCode {
                script: "// Write JS here",
                ..InitialCode::default()
            },
            validator: Some(checks::js_variables),
            next: Some("js-operators"),
        },
        Lesson {
            key: "js-operators",
            track: Track::JavaScript,
            tier: Tier::Advanced,
            title: "JS Operators",
            description: "Arithmetic, Assignment, String, and Logical operators.",
            content: r"# Operators
`+` adds, `*` multiplies, `===` checks equality.

**Your Task:**
`a` is `10` and `b` is `5`. Create `c` = `a * b`.",
            initial: InitialCode {
                script: "let a = 10;\nlet b = 5;\n// Calculate c\n",
                ..InitialCode::default()
            },
            validator: Some(checks::js_operators),
            next: Some("js-datatypes"),
        },
        Lesson {
            key: "js-datatypes",
            track: Track::JavaScript,
            tier: Tier::Advanced,
            title: "JS Data Types",
            description: "Strings, Numbers, BigInt, Booleans, Undefined, Null, Symbols, Objects.",
            content: r#"# Data Types
`"Apple"` is a String. `true` is a Boolean.

**Your Task:**
Set a variable `isLearning` to the boolean `true`, and a variable `name` to the string `"John"`."#,
            initial: InitialCode {
                script: "// Write JS here",
                ..InitialCode::default()
            },
            validator: Some(checks::js_datatypes),
            next: Some("js-functions"),
        },
        Lesson {
            key: "js-functions",
            track: Track::JavaScript,
            tier: Tier::Advanced,
            title: "JS Functions",
            description: "Defining functions, parameters, return values, invocation, and Arrow Functions.",
            content: r#"# Functions
Functions wrap reusable code.

**Your Task:**
Write a function called `greet` that takes a `name` parameter and returns `"Hello " + name`."#,
            initial: InitialCode {
                script: "// Write function here",
                ..InitialCode::default()
            },
            validator: Some(checks::js_functions),
            next: Some("js-objects"),
        },
        Lesson {
            key: "js-objects",
            track: Track::JavaScript,
            tier: Tier::Advanced,
            title: "JS Objects",
            description: "Properties, Methods, the this keyword, Object constructors.",
            content: r#"# Objects
Objects hold properties and methods inside curly brackets `{}`.

**Your Task:**
Create an object called `person` with `firstName` set to `"John"` and `age` set to `30`."#,
            initial: InitialCode {
                script: "// Write JS here",
                ..InitialCode::default()
            },
            validator: Some(checks::js_objects),
            next: Some("js-string-methods"),
        },
        Lesson {
            key: "js-string-methods",
            track: Track::JavaScript,
            tier: Tier::Advanced,
            title: "JS Strings & Methods",
            description: "Escaping characters, templates (${}), length, slice(), substring(), replace(), toUpperCase().",
            content: r#"# String Methods
Strings have properties like `.length` and methods like `.toUpperCase()`.

**Your Task:**
Given `text = "hello"`, create `capText` holding `text` converted to uppercase with a built-in method."#,
            initial: InitialCode {
                script: "let text = \"hello\";\n// Write JS here",
                ..InitialCode::default()
            },
            validator: Some(checks::js_string_methods),
            next: Some("js-number-methods"),
        },
        Lesson {
            key: "js-number-methods",
            track: Track::JavaScript,
            tier: Tier::Advanced,
            title: "JS Numbers & Methods",
            description: "Decimals, NaN, Infinity, toString(), toFixed(), parseInt().",
            content: r"# Number Methods
`toFixed()` returns a string with the number written to a given number of decimals.

**Your Task:**
Given `num = 5.56789`, create `shortNum` by calling `.toFixed(2)` on `num`.",
            initial: InitialCode {
                script: "let num = 5.56789;\n// Write JS here",
                ..InitialCode::default()
            },
            validator: Some(checks::js_number_methods),
            next: Some("js-arrays"),
        },
        Lesson {
            key: "js-arrays",
            track: Track::JavaScript,
            tier: Tier::Advanced,
            title: "JS Arrays & Methods",
            description: "Creating arrays, accessing elements, push(), pop(), shift(), unshift(), splice(), slice().",
            content: r#"# Arrays
Arrays hold multiple values. `.push()` adds an item.

**Your Task:**
Create an array called `fruits` containing `"Apple"` and `"Banana"`, then `.push()` `"Orange"` onto it."#,
            initial: InitialCode {
                script: "// Write JS here",
                ..InitialCode::default()
            },
            validator: Some(checks::js_arrays),
            next: Some("js-conditionals"),
        },
        Lesson {
            key: "js-conditionals",
            track: Track::JavaScript,
            tier: Tier::Advanced,
            title: "JS Conditionals",
            description: "if, else, else if, ternary operators, and switch statements.",
            content: r"# Conditionals
`if` runs a block of code when a condition is true.

**Your Task:**
If `x > 5`, set `isBig` to `true`. Else, set it to `false`. `x` is predefined.",
            initial: InitialCode {
                script: "let x = 10;\nlet isBig;\n// Write logic here",
                ..InitialCode::default()
            },
            validator: Some(checks::js_conditionals),
            next: Some("js-loops"),
        },
        Lesson {
            key: "js-loops",
            track: Track::JavaScript,
            tier: Tier::Advanced,
            title: "JS Loops",
            description: "for, for/in, for/of, while, do/while, break, and continue.",
            content: r"# Loops
Loops run a block of code a number of times.

**Your Task:**
Write a `for` loop starting at `i = 0`, running while `i < 5`, and iterating `i++`. The body can stay empty.",
            initial: InitialCode {
                script: "// Write a for loop here",
                ..InitialCode::default()
            },
            validator: Some(checks::js_loops),
            next: Some("js-scope"),
        },
        Lesson {
            key: "js-scope",
            track: Track::JavaScript,
            tier: Tier::Advanced,
            title: "JS Scope & Hoisting",
            description: "Global vs local vs block scope, and variable hoisting.",
            content: r"# Scope
Scope decides where a variable is visible.
A `let` declared inside a `{ }` block cannot be read outside it.

**Your Task:**
Declare a global `g = 1`. Then open an `if(true)` block and declare `let l = 2` inside it.",
            initial: InitialCode {
                script: "// Write JS here",
                ..InitialCode::default()
            },
            validator: Some(checks::js_scope),
            next: Some("js-strict"),
        },
        Lesson {
            key: "js-strict",
            track: Track::JavaScript,
            tier: Tier::Advanced,
            title: "JS Strict Mode",
            description: "\"use strict\" directives.",
            content: r#"# Strict Mode
"use strict" runs the script in strict mode, where, for example, undeclared variables are errors.

**Your Task:**
Enable strict mode at the top of your script."#,
            initial: InitialCode {
                script: "// Enable strict mode\n",
                ..InitialCode::default()
            },
            validator: Some(checks::js_strict),
            next: None,
        },
    ]
}
