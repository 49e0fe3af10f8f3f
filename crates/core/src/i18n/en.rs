pub(super) const TABLE: &[(&str, &str)] = &[
    ("nav.brand", "Chef Farah Ammar"),
    ("nav.order", "Order"),
    ("nav.back", "Back"),
    ("nav.cart", "Cart"),
    ("nav.switchLanguage", "التبديل للعربية"),
    ("cart.title", "Your cart"),
    ("cart.empty", "Your cart is empty"),
    ("cart.total", "Total"),
    ("cart.orderViaWa", "Cash on delivery"),
    ("cart.payVisa", "Pay by Visa / Mastercard"),
    ("cart.added", "Added to cart!"),
    ("cart.remove", "Delete"),
    ("cart.clear", "Clear cart"),
    ("cart.quantity", "Quantity"),
    ("cart.update", "Update"),
    ("cart.checkout", "Checkout"),
    ("hero.byline", "Gourmet Bites & Sweets"),
    ("hero.title", "Nana's Bites by Chef Farah Ammar"),
    ("hero.tagline", "Tasting the world, One bite at a time."),
    (
        "hero.subtext",
        "Small-batch desserts and gourmet treats. Thoughtful, elegant, unforgettable.",
    ),
    ("hero.cta", "Discover"),
    ("hero.scroll", "Scroll"),
    ("shop.title", "Shop"),
    (
        "shop.sub",
        "Signature bites, bold sauces & the perfect finish, crafted by Chef Farah",
    ),
    ("shop.swipeHint", "Swipe to see more products"),
    ("filter.all", "All"),
    ("filter.boxes", "Dumplings"),
    ("filter.sauces", "Sauces"),
    ("filter.chopsticks", "Chopsticks"),
    ("filter.gifts", "Gifts"),
    ("sort.label", "Sort by"),
    ("sort.aria", "Sort products"),
    ("sort.featured", "Featured"),
    ("sort.newest", "Newest"),
    ("sort.priceAsc", "Price: low to high"),
    ("sort.priceDesc", "Price: high to low"),
    ("product.badge", "Signature"),
    ("product.badgeSauce", "Sauce"),
    ("product.badgeAccessory", "Accessory"),
    ("product.cardTitle", "Nana's Bites – Signature Dumplings"),
    (
        "product.cardDesc",
        "Handcrafted dumplings with rich flavors, wrapped to perfection. Created by Chef Farah Ammar for moments worth savoring.",
    ),
    ("product.viewProduct", "View product"),
    ("product.addToCart", "Add to cart"),
    ("product.backHome", "Back to home"),
    ("product.inside", "What's inside"),
    (
        "product.lead",
        "Handcrafted dumplings made with care and tradition, filled with rich flavors and wrapped to perfection. Created by Chef Farah Ammar for moments worth savoring.",
    ),
    ("product.detail1", "Hand-rolled wheat dough, delicately prepared"),
    ("product.detail2", "Fresh chicken filling"),
    ("product.detail2Meat", "Fresh meat filling"),
    ("product.detail3", "Cabbage and green onions"),
    ("product.detail4", "Garlic and ginger for warm depth"),
    ("product.detail5", "Soy sauce and sesame oil"),
    ("product.detailTeriyaki", "Teriyaki sauce"),
    ("product.detailSweetChili", "Sweet chili sauce"),
    ("product.detail6", "Carefully selected spices"),
    ("product.buyTitle", "Order now"),
    (
        "product.buyDesc",
        "Order via WhatsApp: Visa directly or cash on delivery.",
    ),
    ("product.btnPay", "Visa / Mastercard"),
    ("product.btnCod", "Cash on delivery"),
    ("product.chopsticksNote", "1 ₪ per stick (not per pack)."),
    ("product.footerTagline", "Dessert box · Crafted with love"),
    ("product.notFound", "We couldn't find that product."),
    ("empty.title", "No products in this category"),
    ("empty.inCategory", "No products in "),
    (
        "empty.desc",
        "We don't have any items here yet. Try another filter or check back soon.",
    ),
    ("empty.showAll", "Show all"),
    ("order.title", "Other inquiries"),
    ("order.sub", "Questions? Special requests? We're here for you."),
    ("order.wa", "Contact us via WhatsApp"),
    ("order.placed", "Thank you! Your order has been received."),
    ("footer.tagline", "by Chef Farah Ammar · Crafted with love"),
    ("footer.connect", "Connect"),
    ("footer.payment", "Payment"),
    ("footer.cod", "Cash on delivery"),
    ("footer.instagram", "Follow me on Instagram"),
    ("footer.copy", "Chef Farah Ammar. All rights reserved."),
    ("checkout.title", "Checkout"),
    ("checkout.sub", "Review your order and tell us where to deliver it."),
    ("checkout.yourDetails", "Your details"),
    ("checkout.name", "Full name"),
    ("checkout.phone", "Phone"),
    ("checkout.address", "Delivery address"),
    ("checkout.notes", "Notes (optional)"),
    ("checkout.phonePlaceholder", "05xxxxxxxx"),
    ("checkout.addressPlaceholder", "Street, city, floor/apartment"),
    ("checkout.confirm", "Confirm order"),
    ("checkout.sending", "Sending..."),
    ("checkout.summary", "Order summary"),
    ("checkout.emptyCart", "Your cart is empty"),
    (
        "checkout.emptyDesc",
        "Add something delicious before checking out.",
    ),
    ("checkout.goToShop", "Go to shop"),
    (
        "checkout.successMessage",
        "Order sent! We'll contact you soon to confirm delivery.",
    ),
    ("checkout.orderNumber", "Order number"),
    ("checkout.nameRequired", "Please enter your name"),
    ("checkout.phoneRequired", "Please enter your phone number"),
    ("checkout.addressRequired", "Please enter your delivery address"),
    (
        "checkout.inFlight",
        "Your order is already being sent. Please wait a moment.",
    ),
    ("checkout.failed", "Something went wrong"),
    ("dashboard.title", "Orders"),
    ("dashboard.total", "Total orders"),
    ("dashboard.pending", "Pending"),
    ("dashboard.done", "Delivered"),
    ("dashboard.empty", "No orders yet"),
    ("dashboard.items", "Order"),
    ("dashboard.notes", "Notes"),
    ("dashboard.markDone", "Delivered"),
    ("dashboard.print", "Print invoice"),
    ("dashboard.statusPending", "Pending"),
    ("dashboard.statusDone", "Delivered"),
    ("invoice.title", "Invoice"),
    ("invoice.sub", "Order invoice · Cash on delivery"),
    ("invoice.orderId", "Order number"),
    ("invoice.date", "Date"),
    ("invoice.status", "Status"),
    ("invoice.customer", "Customer"),
    ("invoice.phone", "Phone"),
    ("invoice.address", "Address"),
    ("invoice.item", "Item"),
    ("invoice.quantity", "Qty"),
    ("invoice.price", "Price"),
    ("invoice.lineTotal", "Subtotal"),
    ("invoice.total", "Total"),
    ("invoice.notes", "Notes"),
    ("invoice.footer", "Thank you for your order · Chef Farah Ammar"),
    (
        "cookie.msg",
        "We use cookies to improve your experience and remember your preferences on this site.",
    ),
    ("cookie.accept", "Accept"),
    ("cookie.ignore", "Ignore"),
    ("error.notFound", "Page not found"),
    ("error.generic", "Something went wrong. Please try again."),
];
