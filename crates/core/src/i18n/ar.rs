pub(super) const TABLE: &[(&str, &str)] = &[
    ("nav.brand", "الشيف فرح عمار"),
    ("nav.order", "طلب"),
    ("nav.back", "رجوع"),
    ("nav.cart", "السلة"),
    ("nav.switchLanguage", "Switch to English"),
    ("cart.title", "سلة المشتريات"),
    ("cart.empty", "سلتك فارغة"),
    ("cart.total", "المجموع"),
    ("cart.orderViaWa", "الدفع عند الاستلام"),
    ("cart.payVisa", "الدفع بالفيزا / ماستركارد"),
    ("cart.added", "تمت الإضافة للسلة!"),
    ("cart.remove", "حذف"),
    ("cart.clear", "إفراغ السلة"),
    ("cart.quantity", "الكمية"),
    ("cart.update", "تحديث"),
    ("cart.checkout", "إتمام الطلب"),
    ("hero.byline", "لقمات وحلويات فاخرة"),
    ("hero.title", "نانا بايتس من الشيف فرح عمار"),
    ("hero.tagline", "تذوق العالم، قضمة تلو الأخرى."),
    (
        "hero.subtext",
        "حلويات وقطع فاخرة بكميات محدودة. مدروسة، أنيقة، لا تُنسى.",
    ),
    ("hero.cta", "اكتشف"),
    ("hero.scroll", "تمرير"),
    ("shop.title", "المتجر"),
    (
        "shop.sub",
        "لقمات مميزة، صلصات قوية ولمسة نهائية مثالية من الشيف فرح",
    ),
    ("shop.swipeHint", "اسحب لرؤية المزيد من المنتجات"),
    ("filter.all", "الكل"),
    ("filter.boxes", "دامبلنغ"),
    ("filter.sauces", "الصلصات"),
    ("filter.chopsticks", "عيدان الطعام"),
    ("filter.gifts", "الهدايا"),
    ("sort.label", "ترتيب حسب"),
    ("sort.aria", "ترتيب المنتجات"),
    ("sort.featured", "المميز"),
    ("sort.newest", "الأحدث"),
    ("sort.priceAsc", "السعر: من الأقل للأعلى"),
    ("sort.priceDesc", "السعر: من الأعلى للأقل"),
    ("product.badge", "توقيع"),
    ("product.badgeSauce", "صلصة"),
    ("product.badgeAccessory", "إكسسوار"),
    ("product.cardTitle", "نانا بايتس – دامبلنغ التوقيع"),
    (
        "product.cardDesc",
        "دامبلنغ مصنوع يدوياً بنكهات غنية ومُلفوف بإتقان. من إبداع الشيف فرح عمار لحظات تستحق التذوق.",
    ),
    ("product.viewProduct", "عرض المنتج"),
    ("product.addToCart", "أضف للسلة"),
    ("product.backHome", "العودة للرئيسية"),
    ("product.inside", "ما بداخله"),
    (
        "product.lead",
        "دامبلنغ مصنوع يدوياً بعناية وعلى الطريقة التقليدية، مليء بالنكهات الغنية وملفوف بإتقان. من إبداع الشيف فرح عمار لحظات تستحق التذوق.",
    ),
    ("product.detail1", "عجينة قمح تُلفّ يدوياً وتُعدّ بدقة"),
    ("product.detail2", "حشوة دجاج طازجة"),
    ("product.detail2Meat", "حشوة لحم طازجة"),
    ("product.detail3", "ملفوف وبصل أخضر"),
    ("product.detail4", "ثوم وزنجبيل لعمق دافئ"),
    ("product.detail5", "صلصة الصويا وزيت السمسم"),
    ("product.detailTeriyaki", "صلصة ترياكي"),
    ("product.detailSweetChili", "صلصة الفلفل الحلو"),
    ("product.detail6", "بهارات مُختارة بعناية"),
    ("product.buyTitle", "اطلب الآن"),
    (
        "product.buyDesc",
        "اطلب عبر واتساب: بالفيزا/ماستركارد أو دفع عند الاستلام.",
    ),
    ("product.btnPay", "فيزا / ماستركارد"),
    ("product.btnCod", "دفع عند الاستلام"),
    ("product.chopsticksNote", "1 ₪ للعود الواحد (وليس للمجموعة)."),
    ("product.footerTagline", "صندوق الحلويات · صنع بمحبة"),
    ("product.notFound", "لم نجد هذا المنتج."),
    ("empty.title", "لا منتجات في هذا التصنيف"),
    ("empty.inCategory", "لا توجد منتجات في "),
    (
        "empty.desc",
        "لا توجد منتجات هنا حالياً. جرّب فلتراً آخر أو عد لاحقاً.",
    ),
    ("empty.showAll", "عرض الكل"),
    ("order.title", "استفسارات أخرى"),
    ("order.sub", "أسئلة؟ طلبات خاصة؟ نحن هنا من أجلك."),
    ("order.wa", "تواصل معنا عبر واتساب"),
    ("order.placed", "شكراً لك! تم استلام طلبك."),
    ("footer.tagline", "من الشيف فرح عمار · صنع بمحبة"),
    ("footer.connect", "تواصل"),
    ("footer.payment", "الدفع"),
    ("footer.cod", "دفع عند الاستلام"),
    ("footer.instagram", "تابعني على إنستغرام"),
    ("footer.copy", "الشيف فرح عمار. جميع الحقوق محفوظة."),
    ("checkout.title", "إتمام الطلب"),
    ("checkout.sub", "راجع طلبك وأخبرنا أين نوصله."),
    ("checkout.yourDetails", "بياناتك"),
    ("checkout.name", "الاسم الكامل"),
    ("checkout.phone", "الهاتف"),
    ("checkout.address", "عنوان التوصيل"),
    ("checkout.notes", "ملاحظات (اختياري)"),
    ("checkout.phonePlaceholder", "05xxxxxxxx"),
    ("checkout.addressPlaceholder", "الشارع، المدينة، الطابق/الشقة"),
    ("checkout.confirm", "تأكيد الطلب"),
    ("checkout.sending", "جاري الإرسال..."),
    ("checkout.summary", "ملخص الطلب"),
    ("checkout.emptyCart", "سلتك فارغة"),
    ("checkout.emptyDesc", "أضف شيئاً لذيذاً قبل إتمام الطلب."),
    ("checkout.goToShop", "الذهاب للمتجر"),
    (
        "checkout.successMessage",
        "تم إرسال الطلب! سنتواصل معك قريباً لتأكيد التوصيل.",
    ),
    ("checkout.orderNumber", "رقم الطلب"),
    ("checkout.nameRequired", "يرجى إدخال الاسم"),
    ("checkout.phoneRequired", "يرجى إدخال رقم الهاتف"),
    ("checkout.addressRequired", "يرجى إدخال عنوان التوصيل"),
    ("checkout.inFlight", "طلبك قيد الإرسال. يرجى الانتظار قليلاً."),
    ("checkout.failed", "حدث خطأ ما"),
    ("dashboard.title", "الطلبات"),
    ("dashboard.total", "إجمالي الطلبات"),
    ("dashboard.pending", "قيد الانتظار"),
    ("dashboard.done", "تم التوصيل"),
    ("dashboard.empty", "لا توجد طلبات بعد"),
    ("dashboard.items", "الطلب"),
    ("dashboard.notes", "ملاحظات"),
    ("dashboard.markDone", "تم التوصيل"),
    ("dashboard.print", "طباعة الفاتورة"),
    ("dashboard.statusPending", "قيد الانتظار"),
    ("dashboard.statusDone", "تم التوصيل"),
    ("invoice.title", "فاتورة"),
    ("invoice.sub", "فاتورة طلب · دفع عند الاستلام"),
    ("invoice.orderId", "رقم الطلب"),
    ("invoice.date", "التاريخ"),
    ("invoice.status", "الحالة"),
    ("invoice.customer", "العميل"),
    ("invoice.phone", "الهاتف"),
    ("invoice.address", "العنوان"),
    ("invoice.item", "الصنف"),
    ("invoice.quantity", "الكمية"),
    ("invoice.price", "السعر"),
    ("invoice.lineTotal", "المجموع الفرعي"),
    ("invoice.total", "المجموع"),
    ("invoice.notes", "ملاحظات"),
    ("invoice.footer", "شكراً لطلبك · Chef Farah Ammar"),
    (
        "cookie.msg",
        "نستخدم ملفات تعريف الارتباط لتحسين تجربتك وتذكر تفضيلاتك على الموقع.",
    ),
    ("cookie.accept", "موافق"),
    ("cookie.ignore", "تجاهل"),
    ("error.notFound", "الصفحة غير موجودة"),
    ("error.generic", "حدث خطأ ما. يرجى المحاولة مرة أخرى."),
];
